//! Configuration for the progress store.
//!
//! The store needs two facts from the outside world: which storage slot to
//! use, and how many learning nodes exist in total (the denominator of the
//! overall progress percentage). Both are usually read from the `progress`
//! section of `academy-config.yaml` by `academy-core`.

use serde::{Deserialize, Serialize};

/// Storage slot used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "arcium-progress";

/// Size of the learning node universe when none is configured.
pub const DEFAULT_TOTAL_NODE_COUNT: u32 = 20;

/// Tunables for a [`ProgressStore`](crate::ProgressStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Key of the storage slot holding the serialized progress blob.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Total number of learning nodes (default: 20).
    ///
    /// A value of zero is allowed and makes the overall progress 0.
    #[serde(default = "default_total_node_count")]
    pub total_node_count: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            total_node_count: DEFAULT_TOTAL_NODE_COUNT,
        }
    }
}

impl ProgressConfig {
    /// Return a copy with a different total node count.
    #[must_use]
    pub fn with_total_node_count(mut self, total_node_count: u32) -> Self {
        self.total_node_count = total_node_count;
        self
    }

    /// Return a copy with a different storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_owned()
}

const fn default_total_node_count() -> u32 {
    DEFAULT_TOTAL_NODE_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ProgressConfig::default();
        assert_eq!(cfg.storage_key, "arcium-progress");
        assert_eq!(cfg.total_node_count, 20);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: Option<ProgressConfig> =
            serde_json::from_str(r#"{"total_node_count": 5}"#).ok();
        assert_eq!(
            cfg,
            Some(ProgressConfig::default().with_total_node_count(5))
        );
    }

    #[test]
    fn builders_override_fields() {
        let cfg = ProgressConfig::default()
            .with_storage_key("learner-7")
            .with_total_node_count(0);
        assert_eq!(cfg.storage_key, "learner-7");
        assert_eq!(cfg.total_node_count, 0);
    }
}
