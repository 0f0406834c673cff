//! A learner's session: catalog-aware operations over the progress store.
//!
//! [`LearnerSession`] is what the academy pages call. It validates
//! identifiers against the [`Catalog`], enforces node gating, credits node
//! rewards exactly once, and grants badges as soon as their conditions are
//! met. All persistence goes through the wrapped [`ProgressStore`].

use academy_progress::{KeyValueStorage, ProgressState, ProgressStore};
use academy_types::{BadgeId, LearningNode, LearningPath, Mentor, MentorId, NodeId, PathId};
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::SessionError;
use crate::rules::{self, NodeUnlock};

/// Outcome of completing a learning node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCompletion {
    /// The node that was completed.
    pub node: NodeId,
    /// `false` if the node had already been completed before this call.
    pub newly_completed: bool,
    /// Reward points credited by this call.
    pub points_awarded: u64,
    /// Badges granted as a consequence of this call.
    pub badges_awarded: Vec<BadgeId>,
}

/// Per-node view for rendering the learning map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    /// Node identifier.
    pub id: NodeId,
    /// Display title.
    pub title: String,
    /// Whether the learner has completed it.
    pub completed: bool,
    /// Gate evaluation against the current state.
    pub unlock: NodeUnlock,
}

/// Serializable snapshot of a learner's progress.
///
/// Keys are camelCase, matching the persisted [`ProgressState`] layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Point total.
    pub points: u64,
    /// Held badges, in unlock order.
    pub badges: Vec<BadgeId>,
    /// Selected path, if any.
    pub current_path: Option<PathId>,
    /// Title of the selected path, if it is a catalog path.
    pub current_path_title: Option<String>,
    /// Completed node identifiers, in completion order.
    pub completed_nodes: Vec<NodeId>,
    /// Completed nodes over the configured total, 0 to 100.
    pub overall_progress: f64,
    /// Whether a mentor engagement is active.
    pub mentor_status: bool,
    /// Whether storage holds everything shown here.
    pub persisted: bool,
    /// Status of every catalog node.
    pub nodes: Vec<NodeStatus>,
}

/// Catalog-validated operations over one learner's progress.
#[derive(Debug)]
pub struct LearnerSession<S> {
    store: ProgressStore<S>,
    catalog: Catalog,
}

impl<S: KeyValueStorage> LearnerSession<S> {
    /// Wrap an opened store with the catalog it should be checked against.
    pub const fn new(store: ProgressStore<S>, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    /// The catalog in use.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying progress store.
    pub const fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    /// Current progress state.
    pub const fn state(&self) -> &ProgressState {
        self.store.state()
    }

    /// Consume the session and return the progress store.
    pub fn into_store(self) -> ProgressStore<S> {
        self.store
    }

    /// Select a learning path.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownPath`] if the path is not in the catalog.
    pub fn select_path(&mut self, id: &PathId) -> Result<&LearningPath, SessionError> {
        let path = self
            .catalog
            .path(id)
            .ok_or_else(|| SessionError::UnknownPath(id.clone()))?;
        self.store.set_path(path.id.clone());
        Ok(path)
    }

    /// Check that a node can be started and return it.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownNode`] or [`SessionError::NodeLocked`].
    pub fn start_node(&self, id: &NodeId) -> Result<&LearningNode, SessionError> {
        let node = self
            .catalog
            .node(id)
            .ok_or_else(|| SessionError::UnknownNode(id.clone()))?;
        check_unlocked(self.store.state(), node)?;
        debug!(node = %id, "node started");
        Ok(node)
    }

    /// Complete a node: record it, credit its reward once, grant badges.
    ///
    /// Completing an already completed node succeeds without awarding
    /// anything.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownNode`] or [`SessionError::NodeLocked`].
    pub fn complete_node(&mut self, id: &NodeId) -> Result<NodeCompletion, SessionError> {
        let node = self
            .catalog
            .node(id)
            .ok_or_else(|| SessionError::UnknownNode(id.clone()))?;

        if self.store.state().is_node_completed(id) {
            return Ok(NodeCompletion {
                node: id.clone(),
                newly_completed: false,
                points_awarded: 0,
                badges_awarded: Vec::new(),
            });
        }
        check_unlocked(self.store.state(), node)?;

        let reward = node.reward_points;
        self.store.mark_node_completed(id.clone());
        let before = self.store.state().points();
        self.store.add_points(i64::try_from(reward).unwrap_or(i64::MAX));
        let points_awarded = self.store.state().points().saturating_sub(before);
        let badges_awarded = self.award_eligible_badges();

        info!(
            node = %id,
            points_awarded,
            badges_awarded = badges_awarded.len(),
            "node completed"
        );
        Ok(NodeCompletion {
            node: id.clone(),
            newly_completed: true,
            points_awarded,
            badges_awarded,
        })
    }

    /// Grant a catalog badge explicitly. Returns `false` if already held.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownBadge`] if the badge is not in the catalog.
    pub fn award_badge(&mut self, id: &BadgeId) -> Result<bool, SessionError> {
        if self.catalog.badge(id).is_none() {
            return Err(SessionError::UnknownBadge(id.clone()));
        }
        Ok(self.store.add_badge(id.clone()))
    }

    /// Add points, then grant any badge the new total unlocks.
    ///
    /// Negative amounts are rejected by the store. Returns `true` if the
    /// point total changed.
    pub fn add_points(&mut self, amount: i64) -> bool {
        if !self.store.add_points(amount) {
            return false;
        }
        self.award_eligible_badges();
        true
    }

    /// Start an engagement with an available mentor.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownMentor`] or [`SessionError::MentorUnavailable`].
    pub fn request_mentor(&mut self, id: &MentorId) -> Result<&Mentor, SessionError> {
        let mentor = self
            .catalog
            .mentor(id)
            .ok_or_else(|| SessionError::UnknownMentor(id.clone()))?;
        if !mentor.available {
            return Err(SessionError::MentorUnavailable(id.clone()));
        }
        self.store.set_mentor_status(true);
        info!(mentor = %id, "mentor requested");
        Ok(mentor)
    }

    /// End the current mentor engagement. Returns `false` if none was active.
    pub fn end_mentorship(&mut self) -> bool {
        self.store.set_mentor_status(false)
    }

    /// Snapshot of the learner's progress for display.
    pub fn summary(&self) -> ProgressSummary {
        let state = self.store.state();
        let current_path = state.current_path().cloned();
        let current_path_title = current_path
            .as_ref()
            .and_then(|id| self.catalog.path(id))
            .map(|p| p.title.clone());
        let nodes = self
            .catalog
            .nodes()
            .iter()
            .map(|node| NodeStatus {
                id: node.id.clone(),
                title: node.title.clone(),
                completed: state.is_node_completed(&node.id),
                unlock: rules::node_unlock(state, node),
            })
            .collect();

        ProgressSummary {
            points: state.points(),
            badges: state.badges().to_vec(),
            current_path,
            current_path_title,
            completed_nodes: state.completed_nodes().to_vec(),
            overall_progress: self.store.overall_progress(),
            mentor_status: state.mentor_status(),
            persisted: self.store.is_persisted(),
            nodes,
        }
    }

    /// Grant every badge the current state qualifies for.
    fn award_eligible_badges(&mut self) -> Vec<BadgeId> {
        let earned: Vec<BadgeId> = rules::eligible_badges(self.store.state(), &self.catalog)
            .into_iter()
            .map(|badge| badge.id.clone())
            .collect();
        for id in &earned {
            self.store.add_badge(id.clone());
        }
        earned
    }
}

fn check_unlocked(state: &ProgressState, node: &LearningNode) -> Result<(), SessionError> {
    match rules::node_unlock(state, node) {
        NodeUnlock::Unlocked => Ok(()),
        NodeUnlock::Locked {
            points_short,
            missing_badges,
        } => Err(SessionError::NodeLocked {
            node: node.id.clone(),
            points_short,
            missing_badges,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use academy_progress::{MemoryStorage, ProgressConfig};

    fn session() -> LearnerSession<MemoryStorage> {
        let store = ProgressStore::open(MemoryStorage::new(), ProgressConfig::default());
        LearnerSession::new(store, Catalog::builtin().unwrap())
    }

    #[test]
    fn completing_twice_awards_once() {
        let mut session = session();
        let first = session.complete_node(&NodeId::from("start"));
        assert!(matches!(
            first,
            Ok(NodeCompletion {
                newly_completed: true,
                points_awarded: 20,
                ..
            })
        ));
        let second = session.complete_node(&NodeId::from("start"));
        assert!(matches!(
            second,
            Ok(NodeCompletion {
                newly_completed: false,
                points_awarded: 0,
                ..
            })
        ));
        assert_eq!(session.state().points(), 20);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut session = session();
        assert_eq!(
            session.select_path(&PathId::from("wizard")).err(),
            Some(SessionError::UnknownPath(PathId::from("wizard")))
        );
        assert_eq!(
            session.award_badge(&BadgeId::from("gold")),
            Err(SessionError::UnknownBadge(BadgeId::from("gold")))
        );
        assert!(session.state().current_path().is_none());
        assert!(session.state().badges().is_empty());
    }

    #[test]
    fn busy_mentor_cannot_be_requested() {
        let mut session = session();
        let id = MentorId::from("michael-kim");
        assert_eq!(
            session.request_mentor(&id).err(),
            Some(SessionError::MentorUnavailable(id))
        );
        assert!(!session.state().mentor_status());
    }

    #[test]
    #[allow(clippy::indexing_slicing)]
    fn summary_serializes_gate_status() {
        let session = session();
        let json = serde_json::to_value(session.summary()).unwrap();
        assert_eq!(json["points"], 0);
        assert_eq!(json["currentPath"], serde_json::Value::Null);
        assert_eq!(json["completedNodes"], serde_json::json!([]));
        assert_eq!(json["mentorStatus"], false);
        assert!(json.get("current_path").is_none());
        assert_eq!(json["nodes"][0]["unlock"]["status"], "unlocked");
        assert_eq!(json["nodes"][2]["unlock"]["status"], "locked");
        assert_eq!(json["nodes"][2]["unlock"]["pointsShort"], 40);
    }
}
