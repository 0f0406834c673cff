//! Fixed-field catalog records.
//!
//! These are the entities the academy front end displays: learning paths,
//! badges, learning nodes and mentors. They are loaded from configuration
//! (see `academy-core`) and never persisted as part of a learner's progress.
//! Optional requirement fields default to "no requirement" when omitted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{BadgeId, MentorId, NodeId, PathId};

// ---------------------------------------------------------------------------
// Learning paths
// ---------------------------------------------------------------------------

/// A learning track a user can select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LearningPath {
    /// Unique path identifier.
    pub id: PathId,
    /// Display title (e.g. "Explorer Path").
    pub title: String,
    /// One-paragraph description of what the path teaches.
    pub description: String,
    /// Number of challenges along the path.
    #[serde(default)]
    pub challenges: u32,
    /// Total points awarded for finishing every challenge on the path.
    #[serde(default)]
    #[ts(type = "number")]
    pub reward_points: u64,
}

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

/// Definition of an achievement badge and the conditions that unlock it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BadgeDefinition {
    /// Unique badge identifier.
    pub id: BadgeId,
    /// Display name (e.g. "First-Mint").
    pub name: String,
    /// What the badge is awarded for.
    pub description: String,
    /// Relative image path shown next to the badge.
    #[serde(default)]
    pub image: String,
    /// Human-readable requirement list shown in the badge details view.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Minimum point total before the badge can be awarded automatically.
    #[serde(default)]
    #[ts(type = "number")]
    pub required_points: u64,
    /// Learning nodes that must all be completed for automatic award.
    ///
    /// A badge with no required nodes and zero required points is awarded
    /// on the learner's next award check.
    #[serde(default)]
    pub required_nodes: Vec<NodeId>,
}

// ---------------------------------------------------------------------------
// Learning nodes
// ---------------------------------------------------------------------------

/// One completable unit of learning content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LearningNode {
    /// Unique node identifier.
    pub id: NodeId,
    /// Display title (e.g. "Privacy 101").
    pub title: String,
    /// Short description of the node's challenge.
    #[serde(default)]
    pub description: String,
    /// Points awarded the first time the node is completed.
    #[serde(default)]
    #[ts(type = "number")]
    pub reward_points: u64,
    /// Minimum point total before the node can be started.
    #[serde(default)]
    #[ts(type = "number")]
    pub required_points: u64,
    /// Badges that must be held before the node can be started.
    #[serde(default)]
    pub required_badges: Vec<BadgeId>,
}

// ---------------------------------------------------------------------------
// Mentors
// ---------------------------------------------------------------------------

/// A community mentor a learner can request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Mentor {
    /// Unique mentor identifier.
    pub id: MentorId,
    /// Display name.
    pub name: String,
    /// Area of expertise (e.g. "MPC & Privacy").
    pub expertise: String,
    /// Average rating on a 0.0 to 5.0 scale.
    #[serde(default)]
    pub rating: f64,
    /// Whether the mentor is currently accepting requests.
    #[serde(default)]
    pub available: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn badge_requirement_fields_default_when_omitted() {
        let json = r#"{"id":"key-holder","name":"Key-Holder","description":"keys"}"#;
        let badge: BadgeDefinition = serde_json::from_str(json).unwrap();
        assert!(badge.requirements.is_empty());
        assert_eq!(badge.required_points, 0);
        assert!(badge.required_nodes.is_empty());
        assert!(badge.image.is_empty());
    }

    #[test]
    fn mentor_availability_defaults_to_false() {
        let json = r#"{"id":"kim","name":"Michael Kim","expertise":"Smart Contracts"}"#;
        let mentor: Option<Mentor> = serde_json::from_str(json).ok();
        assert_eq!(mentor.map(|m| m.available), Some(false));
    }
}
