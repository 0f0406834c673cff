//! Error types for the progress store.
//!
//! None of these ever escape a [`ProgressStore`](crate::ProgressStore)
//! mutator. They are returned by the lower-level storage and codec functions
//! so that callers composing those functions directly can still see what went
//! wrong; the store itself logs them and degrades to in-memory operation.

/// Errors raised by a [`KeyValueStorage`](crate::KeyValueStorage) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage medium is disabled or otherwise unreachable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the backend's byte quota.
    #[error("storage quota exceeded: {required} bytes required, quota is {quota} bytes")]
    QuotaExceeded {
        /// Total bytes the backend would hold after the write.
        required: usize,
        /// Maximum bytes the backend accepts.
        quota: usize,
    },

    /// The key cannot be used with this backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// A filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The state could not be serialized before writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The persisted progress blob could not be interpreted at all.
///
/// Individual malformed fields do not produce this error; they fall back to
/// their defaults. Only input that is not a JSON object is rejected.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The blob is not valid JSON.
    #[error("persisted progress is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The blob is valid JSON but not an object.
    #[error("persisted progress must be a JSON object, found {found}")]
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },
}
