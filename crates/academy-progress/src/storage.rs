//! Synchronous key-value storage backends.
//!
//! The progress store persists a single JSON string under one key. Anything
//! that can get and set strings by key can back it: a browser's local storage
//! behind a wasm shim, a directory on disk ([`FileStorage`](crate::FileStorage)),
//! or the in-memory [`MemoryStorage`] used by tests and by hosts that do not
//! persist at all.

use std::collections::BTreeMap;

use crate::error::StorageError;

/// A durable, synchronous string key-value surface.
///
/// Implementations must treat `set` as a full replacement of any prior value
/// and return `Ok(None)` from `get` for keys that were never written.
pub trait KeyValueStorage {
    /// Read the value stored at `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` at `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-memory storage with optional quota and an availability switch.
///
/// The quota counts key plus value bytes across all entries, the way browser
/// local storage accounts for its per-origin limit. Marking the storage
/// unavailable makes every call fail with [`StorageError::Unavailable`],
/// which mirrors storage disabled by privacy settings.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
    available: bool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    /// Create an empty, unlimited, available storage.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes: None,
            available: true,
        }
    }

    /// Create an empty storage that refuses writes beyond `quota_bytes`.
    pub const fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
            available: true,
        }
    }

    /// Create a storage whose every operation fails.
    pub const fn unavailable() -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes: None,
            available: false,
        }
    }

    /// Switch availability on or off. Existing entries are kept.
    pub const fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes used by all keys and values.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .fold(0_usize, |acc, (k, v)| {
                acc.saturating_add(k.len()).saturating_add(v.len())
            })
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available {
            Ok(())
        } else {
            Err(StorageError::Unavailable(
                "in-memory storage is disabled".to_owned(),
            ))
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_available()?;

        if let Some(quota) = self.quota_bytes {
            let replaced = self
                .entries
                .get(key)
                .map_or(0, |old| key.len().saturating_add(old.len()));
            let required = self
                .used_bytes()
                .saturating_sub(replaced)
                .saturating_add(key.len())
                .saturating_add(value.len());
            if required > quota {
                return Err(StorageError::QuotaExceeded { required, quota });
            }
        }

        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let storage = MemoryStorage::new();
        assert!(matches!(storage.get("nothing"), Ok(None)));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut storage = MemoryStorage::new();
        assert!(storage.set("k", "one").is_ok());
        assert!(storage.set("k", "two").is_ok());
        assert_eq!(storage.get("k").ok().flatten().as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let mut storage = MemoryStorage::new();
        assert!(storage.remove("k").is_ok());
        assert!(storage.is_empty());
    }

    #[test]
    fn quota_counts_keys_and_values() {
        let mut storage = MemoryStorage::with_quota(10);
        assert!(storage.set("ab", "12345678").is_ok());
        assert_eq!(storage.used_bytes(), 10);

        let result = storage.set("c", "1");
        assert!(matches!(
            result,
            Err(StorageError::QuotaExceeded {
                required: 12,
                quota: 10
            })
        ));
    }

    #[test]
    fn quota_allows_replacing_with_same_size_value() {
        let mut storage = MemoryStorage::with_quota(10);
        assert!(storage.set("ab", "12345678").is_ok());
        assert!(storage.set("ab", "87654321").is_ok());
        assert_eq!(storage.get("ab").ok().flatten().as_deref(), Some("87654321"));
    }

    #[test]
    fn unavailable_storage_fails_every_call() {
        let mut storage = MemoryStorage::unavailable();
        assert!(matches!(storage.get("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(storage.set("k", "v"), Err(StorageError::Unavailable(_))));
        assert!(matches!(storage.remove("k"), Err(StorageError::Unavailable(_))));

        storage.set_available(true);
        assert!(storage.set("k", "v").is_ok());
    }

    #[test]
    fn mutable_reference_is_storage() {
        fn write<S: KeyValueStorage>(mut s: S) -> Result<(), StorageError> {
            s.set("via-ref", "yes")
        }
        let mut storage = MemoryStorage::new();
        assert!(write(&mut storage).is_ok());
        assert_eq!(storage.get("via-ref").ok().flatten().as_deref(), Some("yes"));
    }
}
