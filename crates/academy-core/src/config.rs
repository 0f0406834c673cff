//! Configuration loading and typed config structures for the Academy.
//!
//! The canonical configuration lives in `academy-config.yaml`. Every section
//! is optional: a missing file section falls back to defaults, and a missing
//! `catalog` section falls back to the built-in catalog (see
//! [`builtin`](crate::builtin)).
//!
//! ```yaml
//! progress:
//!   storage_key: arcium-progress
//!   total_node_count: 20
//! storage:
//!   data_dir: .academy
//! logging:
//!   level: info
//!   json: false
//! catalog:
//!   default_path: explorer
//!   paths: [...]
//!   badges: [...]
//!   nodes: [...]
//!   mentors: [...]
//! ```

use std::path::Path;

use academy_progress::ProgressConfig;
use academy_types::{BadgeDefinition, LearningNode, LearningPath, Mentor, PathId};
use serde::Deserialize;

use crate::builtin;

/// Environment variable overriding `storage.data_dir`.
pub const ENV_DATA_DIR: &str = "ACADEMY_DATA_DIR";
/// Environment variable overriding `progress.storage_key`.
pub const ENV_STORAGE_KEY: &str = "ACADEMY_STORAGE_KEY";
/// Environment variable overriding `progress.total_node_count`.
pub const ENV_TOTAL_NODES: &str = "ACADEMY_TOTAL_NODES";
/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "ACADEMY_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid value for {name}: {message}")]
    Env {
        /// Name of the environment variable.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// The catalog is internally inconsistent.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level academy configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AcademyConfig {
    /// Progress store settings (storage key, node total).
    #[serde(default)]
    pub progress: ProgressConfig,

    /// Where file-backed storage lives.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Paths, badges, nodes and mentors.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AcademyConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment overrides are applied after parsing:
    /// - `ACADEMY_DATA_DIR` overrides `storage.data_dir`
    /// - `ACADEMY_STORAGE_KEY` overrides `progress.storage_key`
    /// - `ACADEMY_TOTAL_NODES` overrides `progress.total_node_count`
    /// - `ACADEMY_LOG_LEVEL` overrides `logging.level`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Env`] if an override cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply env overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] on malformed YAML or
    /// [`ConfigError::Env`] on an unparseable override.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if `ACADEMY_TOTAL_NODES` is not a number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// `lookup` returns the value of a variable, or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if the node total is not a number.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_DATA_DIR) {
            self.storage.data_dir = val;
        }
        if let Some(val) = lookup(ENV_STORAGE_KEY) {
            self.progress.storage_key = val;
        }
        if let Some(val) = lookup(ENV_TOTAL_NODES) {
            self.progress.total_node_count =
                val.trim().parse().map_err(|e| ConfigError::Env {
                    name: ENV_TOTAL_NODES,
                    message: format!("{val:?} is not a node count: {e}"),
                })?;
        }
        if let Some(val) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = val;
        }
        Ok(())
    }
}

/// File storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding persisted progress (default: `.academy`).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error).
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Catalog section. Each list defaults to the built-in content when omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogConfig {
    /// Path offered to callers that want a fallback selection.
    #[serde(default = "builtin::default_path")]
    pub default_path: PathId,

    /// Selectable learning paths.
    #[serde(default = "builtin::paths")]
    pub paths: Vec<LearningPath>,

    /// Badge definitions.
    #[serde(default = "builtin::badges")]
    pub badges: Vec<BadgeDefinition>,

    /// Learning nodes in curriculum order.
    #[serde(default = "builtin::nodes")]
    pub nodes: Vec<LearningNode>,

    /// Mentor network.
    #[serde(default = "builtin::mentors")]
    pub mentors: Vec<Mentor>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_path: builtin::default_path(),
            paths: builtin::paths(),
            badges: builtin::badges(),
            nodes: builtin::nodes(),
            mentors: builtin::mentors(),
        }
    }
}

fn default_data_dir() -> String {
    ".academy".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
