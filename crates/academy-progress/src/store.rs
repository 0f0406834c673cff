//! The progress store: load, mutate, persist.
//!
//! [`ProgressStore`] holds the authoritative in-memory [`ProgressState`] and
//! writes it through to a [`KeyValueStorage`] slot after every mutation that
//! changes it. Persistence is best-effort. A failed write is logged and
//! recorded in [`SaveStatus`], and the in-memory state stays authoritative
//! for the rest of the session. No mutator returns an error.
//!
//! # Write-through order
//!
//! 1. Validate the argument (negative point amounts are rejected).
//! 2. Mutate the in-memory state.
//! 3. If anything changed, serialize the whole state and write the slot.

use academy_types::{BadgeId, NodeId, PathId};
use tracing::{debug, info, warn};

use crate::codec;
use crate::config::ProgressConfig;
use crate::error::StorageError;
use crate::state::ProgressState;
use crate::storage::KeyValueStorage;

// ---------------------------------------------------------------------------
// Free functions: Load() / Save(state)
// ---------------------------------------------------------------------------

/// Read the progress blob stored at `key`.
///
/// An absent slot, an unreadable backend, or a malformed blob all yield the
/// default state. This function never fails.
pub fn load_state<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> ProgressState {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no persisted progress, starting fresh");
            return ProgressState::default();
        }
        Err(e) => {
            warn!(key, error = %e, "progress storage unreadable, starting fresh");
            return ProgressState::default();
        }
    };

    codec::decode(&raw).unwrap_or_else(|e| {
        warn!(key, error = %e, "persisted progress is malformed, starting fresh");
        ProgressState::default()
    })
}

/// Serialize `state` and write it to `key`, replacing any prior value.
pub fn save_state<S: KeyValueStorage + ?Sized>(
    storage: &mut S,
    key: &str,
    state: &ProgressState,
) -> Result<(), StorageError> {
    let json = codec::encode(state)?;
    storage.set(key, &json)
}

/// Percentage of `completed` over `total`, clamped to `[0, 100]`.
///
/// Returns 0 when `total` is 0.
pub fn progress_percentage(completed: usize, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let completed = u32::try_from(completed).unwrap_or(u32::MAX);
    let pct = f64::from(completed) / f64::from(total) * 100.0;
    pct.clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// SaveStatus
// ---------------------------------------------------------------------------

/// Outcome of the most recent persistence attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing has been written since the store was opened.
    #[default]
    Clean,
    /// The last write succeeded.
    Saved,
    /// The last write failed; the in-memory state is ahead of storage.
    Failed {
        /// Rendered [`StorageError`] of the failed write.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// ProgressStore
// ---------------------------------------------------------------------------

/// Authoritative learner progress with write-through persistence.
#[derive(Debug)]
pub struct ProgressStore<S> {
    storage: S,
    config: ProgressConfig,
    state: ProgressState,
    save_status: SaveStatus,
}

impl<S: KeyValueStorage> ProgressStore<S> {
    /// Open a store over `storage`, loading any persisted progress.
    pub fn open(storage: S, config: ProgressConfig) -> Self {
        let state = load_state(&storage, &config.storage_key);
        debug!(
            key = config.storage_key,
            points = state.points(),
            badges = state.badges().len(),
            completed_nodes = state.completed_node_count(),
            "progress store opened"
        );
        Self {
            storage,
            config,
            state,
            save_status: SaveStatus::Clean,
        }
    }

    /// Current in-memory state.
    pub const fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Store configuration.
    pub const fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Outcome of the most recent write.
    pub const fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// Whether storage holds everything the in-memory state holds.
    pub const fn is_persisted(&self) -> bool {
        !matches!(self.save_status, SaveStatus::Failed { .. })
    }

    /// Borrow the storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Read the persisted slot afresh, without touching the in-memory state.
    pub fn load(&self) -> ProgressState {
        load_state(&self.storage, &self.config.storage_key)
    }

    /// Replace the in-memory state with whatever storage currently holds.
    ///
    /// Useful when another writer (a second browser tab) may have updated
    /// the slot. Unsaved in-memory changes are discarded.
    pub fn reload(&mut self) -> &ProgressState {
        self.state = self.load();
        self.save_status = SaveStatus::Clean;
        &self.state
    }

    /// Write the in-memory state to storage.
    ///
    /// Returns `true` on success. Failures are logged and recorded in
    /// [`save_status`](Self::save_status), never propagated.
    pub fn save(&mut self) -> bool {
        match save_state(&mut self.storage, &self.config.storage_key, &self.state) {
            Ok(()) => {
                debug!(key = self.config.storage_key, "progress saved");
                self.save_status = SaveStatus::Saved;
                true
            }
            Err(e) => {
                warn!(
                    key = self.config.storage_key,
                    error = %e,
                    "progress not persisted, keeping in-memory state"
                );
                self.save_status = SaveStatus::Failed {
                    reason: e.to_string(),
                };
                false
            }
        }
    }

    // -- Mutators -------------------------------------------------------------

    /// Add `amount` points.
    ///
    /// Negative amounts are rejected and leave the state untouched. Returns
    /// `true` if the point total changed.
    pub fn add_points(&mut self, amount: i64) -> bool {
        let Ok(amount) = u64::try_from(amount) else {
            warn!(amount, "rejected negative point amount");
            return false;
        };
        if !self.state.credit_points(amount) {
            return false;
        }
        debug!(amount, total = self.state.points(), "points added");
        self.save();
        true
    }

    /// Unlock `badge`. Idempotent: returns `false` if already held.
    pub fn add_badge(&mut self, badge: BadgeId) -> bool {
        let id = badge.to_string();
        if !self.state.insert_badge(badge) {
            return false;
        }
        info!(badge = id, "badge unlocked");
        self.save();
        true
    }

    /// Select `path` as the current learning path.
    ///
    /// Any identifier is accepted; validation belongs to the caller.
    pub fn set_path(&mut self, path: PathId) {
        let id = path.to_string();
        self.state.replace_path(path);
        info!(path = id, "learning path selected");
        self.save();
    }

    /// Record `node` as completed. Returns `false` if it already was.
    pub fn mark_node_completed(&mut self, node: NodeId) -> bool {
        let id = node.to_string();
        if !self.state.insert_completed_node(node) {
            return false;
        }
        debug!(
            node = id,
            completed = self.state.completed_node_count(),
            "node completed"
        );
        self.save();
        true
    }

    /// Set whether a mentor engagement is active. Returns `true` if changed.
    pub fn set_mentor_status(&mut self, active: bool) -> bool {
        if !self.state.replace_mentor_status(active) {
            return false;
        }
        info!(active, "mentor status changed");
        self.save();
        true
    }

    // -- Derived values -------------------------------------------------------

    /// Completed nodes as a percentage of the configured node total.
    pub fn overall_progress(&self) -> f64 {
        progress_percentage(
            self.state.completed_node_count(),
            self.config.total_node_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn percentage_of_zero_total_is_zero() {
        assert!(approx(progress_percentage(5, 0), 0.0));
    }

    #[test]
    fn percentage_is_clamped_to_one_hundred() {
        assert!(approx(progress_percentage(30, 20), 100.0));
        assert!(approx(progress_percentage(5, 20), 25.0));
    }

    #[test]
    fn zero_points_is_a_no_op_without_write() {
        let mut store = ProgressStore::open(MemoryStorage::new(), ProgressConfig::default());
        assert!(!store.add_points(0));
        assert_eq!(*store.save_status(), SaveStatus::Clean);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn repeated_badge_skips_second_write() {
        let mut store = ProgressStore::open(MemoryStorage::new(), ProgressConfig::default());
        assert!(store.add_badge(BadgeId::from("x")));
        assert!(!store.add_badge(BadgeId::from("x")));
        assert_eq!(store.state().badges(), &[BadgeId::from("x")]);
    }

    #[test]
    fn set_path_writes_even_when_unchanged() {
        let mut store = ProgressStore::open(MemoryStorage::new(), ProgressConfig::default());
        store.set_path(PathId::from("explorer"));
        store.set_path(PathId::from("explorer"));
        assert_eq!(*store.save_status(), SaveStatus::Saved);
        assert_eq!(store.load().current_path(), Some(&PathId::from("explorer")));
    }

    #[test]
    fn mentor_status_toggles() {
        let mut store = ProgressStore::open(MemoryStorage::new(), ProgressConfig::default());
        assert!(store.set_mentor_status(true));
        assert!(!store.set_mentor_status(true));
        assert!(store.load().mentor_status());
        assert!(store.set_mentor_status(false));
        assert!(!store.load().mentor_status());
    }

    #[test]
    fn reload_discards_unsaved_changes() {
        let mut storage = MemoryStorage::new();
        storage.set_available(false);
        let mut store = ProgressStore::open(storage, ProgressConfig::default());
        assert!(store.add_points(10));
        assert!(!store.is_persisted());

        let reloaded = store.reload().clone();
        assert_eq!(reloaded, ProgressState::default());
        assert!(store.is_persisted());
    }
}
