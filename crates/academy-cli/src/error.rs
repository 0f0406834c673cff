//! Error types for the `academy` binary.

use academy_core::{ConfigError, SessionError};
use academy_progress::StorageError;

/// Top-level error for a CLI invocation.
///
/// Each variant wraps one subsystem error so command handlers can
/// propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration or catalog loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The progress directory could not be opened.
    #[error("storage error: {source}")]
    Storage {
        /// The underlying storage error.
        #[from]
        source: StorageError,
    },

    /// The requested operation was rejected.
    #[error("{source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: SessionError,
    },

    /// Rendering output failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}
