//! The learner's progress record.
//!
//! [`ProgressState`] is a flat record: a point counter, two ordered sets of
//! identifiers, an optional path and a flag. Fields are private. Readers use
//! the accessors; writers go through [`ProgressStore`](crate::ProgressStore),
//! which is the only place the crate-private mutators are called from, so the
//! "no duplicates" and "never negative" invariants hold for every state a
//! caller can observe.

use academy_types::{BadgeId, NodeId, PathId};
use serde::Serialize;
use ts_rs::TS;

/// Persisted gamification state for a single learner.
///
/// Serializes to the camelCase layout of the storage slot:
///
/// ```json
/// {"points":0,"badges":[],"currentPath":null,"completedNodes":[],"mentorStatus":false}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ProgressState {
    /// Accumulated reward currency.
    #[ts(type = "number")]
    points: u64,
    /// Unlocked badges in unlock order, no duplicates.
    badges: Vec<BadgeId>,
    /// Last selected learning path.
    current_path: Option<PathId>,
    /// Completed learning nodes in completion order, no duplicates.
    completed_nodes: Vec<NodeId>,
    /// Whether a mentor engagement is active.
    mentor_status: bool,
}

impl ProgressState {
    /// Assemble a state from decoded parts, dropping repeated identifiers.
    ///
    /// The first occurrence of each badge and node wins so that display order
    /// is stable.
    pub(crate) fn from_parts(
        points: u64,
        badges: Vec<BadgeId>,
        current_path: Option<PathId>,
        completed_nodes: Vec<NodeId>,
        mentor_status: bool,
    ) -> Self {
        let mut state = Self {
            points,
            current_path,
            mentor_status,
            ..Self::default()
        };
        for badge in badges {
            state.insert_badge(badge);
        }
        for node in completed_nodes {
            state.insert_completed_node(node);
        }
        state
    }

    // -- Accessors ----------------------------------------------------------

    /// Current point total.
    pub const fn points(&self) -> u64 {
        self.points
    }

    /// Unlocked badges in unlock order.
    pub fn badges(&self) -> &[BadgeId] {
        &self.badges
    }

    /// Whether the learner holds `badge`.
    pub fn has_badge(&self, badge: &BadgeId) -> bool {
        self.badges.contains(badge)
    }

    /// Last selected learning path, if any.
    pub const fn current_path(&self) -> Option<&PathId> {
        self.current_path.as_ref()
    }

    /// Completed learning nodes in completion order.
    pub fn completed_nodes(&self) -> &[NodeId] {
        &self.completed_nodes
    }

    /// Whether `node` has been completed.
    pub fn is_node_completed(&self, node: &NodeId) -> bool {
        self.completed_nodes.contains(node)
    }

    /// Number of distinct completed nodes.
    pub fn completed_node_count(&self) -> usize {
        self.completed_nodes.len()
    }

    /// Whether a mentor engagement is active.
    pub const fn mentor_status(&self) -> bool {
        self.mentor_status
    }

    // -- Mutators (store only) ----------------------------------------------

    /// Add `amount` to the point total, saturating at `u64::MAX`.
    ///
    /// Returns `true` if the total changed.
    pub(crate) const fn credit_points(&mut self, amount: u64) -> bool {
        let before = self.points;
        self.points = before.saturating_add(amount);
        self.points != before
    }

    /// Append `badge` unless already held. Returns `true` if inserted.
    pub(crate) fn insert_badge(&mut self, badge: BadgeId) -> bool {
        if self.badges.contains(&badge) {
            return false;
        }
        self.badges.push(badge);
        true
    }

    /// Replace the current path. Returns `true` if it changed.
    pub(crate) fn replace_path(&mut self, path: PathId) -> bool {
        let changed = self.current_path.as_ref() != Some(&path);
        self.current_path = Some(path);
        changed
    }

    /// Append `node` unless already completed. Returns `true` if inserted.
    pub(crate) fn insert_completed_node(&mut self, node: NodeId) -> bool {
        if self.completed_nodes.contains(&node) {
            return false;
        }
        self.completed_nodes.push(node);
        true
    }

    /// Set the mentor flag. Returns `true` if it changed.
    pub(crate) const fn replace_mentor_status(&mut self, active: bool) -> bool {
        let changed = self.mentor_status != active;
        self.mentor_status = active;
        changed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_zero_valued() {
        let state = ProgressState::default();
        assert_eq!(state.points(), 0);
        assert!(state.badges().is_empty());
        assert!(state.current_path().is_none());
        assert!(state.completed_nodes().is_empty());
        assert!(!state.mentor_status());
    }

    #[test]
    fn from_parts_drops_repeated_ids_keeping_first_order() {
        let state = ProgressState::from_parts(
            3,
            vec![
                BadgeId::from("key-holder"),
                BadgeId::from("first-mint"),
                BadgeId::from("key-holder"),
            ],
            None,
            vec![NodeId::from("start"), NodeId::from("start")],
            false,
        );
        assert_eq!(
            state.badges(),
            &[BadgeId::from("key-holder"), BadgeId::from("first-mint")]
        );
        assert_eq!(state.completed_node_count(), 1);
    }

    #[test]
    fn credit_points_saturates() {
        let mut state = ProgressState::from_parts(
            u64::MAX.saturating_sub(1),
            Vec::new(),
            None,
            Vec::new(),
            false,
        );
        assert!(state.credit_points(5));
        assert_eq!(state.points(), u64::MAX);
        assert!(!state.credit_points(1));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let state = ProgressState::default();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"points":0,"badges":[],"currentPath":null,"completedNodes":[],"mentorStatus":false}"#
        );
    }

    #[test]
    fn export_bindings() {
        let _ = ProgressState::export_all();
    }
}
