//! Locally persisted learner progress for the Academy.
//!
//! This crate owns the one piece of the academy front end with a data
//! contract: the learner's points, badges, selected path, completed nodes
//! and mentor flag, mirrored to a key-value storage slot after every change.
//! It has no knowledge of which paths, badges or nodes exist; that catalog
//! lives in `academy-core`.
//!
//! # Architecture
//!
//! ```text
//! caller --> ProgressStore --(codec::encode)--> KeyValueStorage slot
//!               |   ^
//!               |   +----(codec::decode, defaults on failure)----+
//!               v
//!          ProgressState (authoritative in memory)
//! ```
//!
//! # Modules
//!
//! - [`codec`] -- Tolerant JSON decoding, plain encoding
//! - [`config`] -- [`ProgressConfig`] (storage key, total node count)
//! - [`error`] -- [`StorageError`] and [`DecodeError`]
//! - [`file_storage`] -- [`FileStorage`], one file per key
//! - [`state`] -- [`ProgressState`]
//! - [`storage`] -- [`KeyValueStorage`] trait and [`MemoryStorage`]
//! - [`store`] -- [`ProgressStore`], `load_state` / `save_state`
//!
//! # Usage
//!
//! ```
//! use academy_progress::{MemoryStorage, ProgressConfig, ProgressStore};
//! use academy_types::{BadgeId, NodeId};
//!
//! let mut store = ProgressStore::open(MemoryStorage::new(), ProgressConfig::default());
//! store.add_points(10);
//! store.add_badge(BadgeId::from("first-mint"));
//! store.mark_node_completed(NodeId::from("start"));
//!
//! assert_eq!(store.state().points(), 10);
//! assert_eq!(store.load(), *store.state());
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod file_storage;
pub mod state;
pub mod storage;
pub mod store;

// Re-export primary types for convenience.
pub use config::ProgressConfig;
pub use error::{DecodeError, StorageError};
pub use file_storage::FileStorage;
pub use state::ProgressState;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{ProgressStore, SaveStatus, load_state, progress_percentage, save_state};
