//! Error types for learner session operations.

use academy_types::{BadgeId, MentorId, NodeId, PathId};

/// Errors returned by [`LearnerSession`](crate::session::LearnerSession).
///
/// Persistence failures are not errors here: the progress store logs them
/// and keeps the in-memory state authoritative.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The path is not in the catalog.
    #[error("unknown learning path: {0}")]
    UnknownPath(PathId),

    /// The node is not in the catalog.
    #[error("unknown learning node: {0}")]
    UnknownNode(NodeId),

    /// The badge is not in the catalog.
    #[error("unknown badge: {0}")]
    UnknownBadge(BadgeId),

    /// The mentor is not in the catalog.
    #[error("unknown mentor: {0}")]
    UnknownMentor(MentorId),

    /// The node's point or badge gate is not met.
    #[error(
        "node {node} is locked: {points_short} more points needed, missing badges [{}]",
        join_ids(.missing_badges)
    )]
    NodeLocked {
        /// The gated node.
        node: NodeId,
        /// Points still needed.
        points_short: u64,
        /// Required badges not yet held.
        missing_badges: Vec<BadgeId>,
    },

    /// The mentor exists but is not accepting requests.
    #[error("mentor {0} is not available")]
    MentorUnavailable(MentorId),
}

fn join_ids(ids: &[BadgeId]) -> String {
    ids.iter().map(BadgeId::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_message_lists_missing_badges() {
        let err = SessionError::NodeLocked {
            node: NodeId::from("advanced"),
            points_short: 0,
            missing_badges: vec![BadgeId::from("key-holder"), BadgeId::from("first-mint")],
        };
        assert_eq!(
            err.to_string(),
            "node advanced is locked: 0 more points needed, missing badges [key-holder, first-mint]"
        );
    }
}
