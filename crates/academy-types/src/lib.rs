//! Shared type definitions for the Academy progress system.
//!
//! This crate holds the identifier newtypes and catalog records used across
//! the workspace. Types flow downstream to `TypeScript` via `ts-rs` for the
//! academy web front end.
//!
//! # Modules
//!
//! - [`ids`] -- String identifier wrappers for paths, badges, nodes, mentors
//! - [`records`] -- Fixed-field catalog records

pub mod ids;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use ids::{BadgeId, MentorId, NodeId, PathId};
pub use records::{BadgeDefinition, LearningNode, LearningPath, Mentor};
