//! Catalog, configuration and learner session for the Academy.
//!
//! `academy-progress` stores whatever it is told. This crate knows what the
//! academy actually offers (paths, badges, nodes, mentors), decides when a
//! node is unlocked or a badge is earned, and exposes [`LearnerSession`] as
//! the single entry point the pages and the CLI drive.
//!
//! # Modules
//!
//! - [`builtin`] -- The catalog shipped when no config overrides it
//! - [`catalog`] -- [`Catalog`], validated lookups
//! - [`config`] -- [`AcademyConfig`] loaded from `academy-config.yaml`
//! - [`error`] -- [`SessionError`]
//! - [`rules`] -- Badge eligibility and node gating
//! - [`session`] -- [`LearnerSession`] and its result types

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod rules;
pub mod session;

pub use catalog::Catalog;
pub use config::{AcademyConfig, CatalogConfig, ConfigError, LoggingConfig, StorageConfig};
pub use error::SessionError;
pub use rules::{NodeUnlock, badge_eligible, eligible_badges, node_unlock};
pub use session::{LearnerSession, NodeCompletion, NodeStatus, ProgressSummary};
