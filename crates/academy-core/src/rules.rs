//! Badge eligibility and node gating.
//!
//! Pure functions over a [`ProgressState`] and catalog records. Nothing here
//! mutates progress; the session applies the outcomes.

use academy_progress::ProgressState;
use academy_types::{BadgeDefinition, BadgeId, LearningNode};
use serde::Serialize;

use crate::catalog::Catalog;

/// Whether `state` meets every condition of `badge`.
///
/// A badge with no required points and no required nodes is eligible for
/// every state, so it is granted on the learner's next award check.
pub fn badge_eligible(state: &ProgressState, badge: &BadgeDefinition) -> bool {
    state.points() >= badge.required_points
        && badge
            .required_nodes
            .iter()
            .all(|node| state.is_node_completed(node))
}

/// Badges `state` qualifies for but does not yet hold, in catalog order.
pub fn eligible_badges<'a>(state: &ProgressState, catalog: &'a Catalog) -> Vec<&'a BadgeDefinition> {
    catalog
        .badges()
        .iter()
        .filter(|badge| !state.has_badge(&badge.id) && badge_eligible(state, badge))
        .collect()
}

/// Whether a learning node can be started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum NodeUnlock {
    /// The node can be started.
    Unlocked,
    /// The node is gated.
    Locked {
        /// Points still needed (0 if the point requirement is met).
        points_short: u64,
        /// Required badges the learner does not hold.
        missing_badges: Vec<BadgeId>,
    },
}

impl NodeUnlock {
    /// Whether the node can be started.
    pub const fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

/// Evaluate the gate on `node` for `state`.
pub fn node_unlock(state: &ProgressState, node: &LearningNode) -> NodeUnlock {
    let points_short = node.required_points.saturating_sub(state.points());
    let missing_badges: Vec<BadgeId> = node
        .required_badges
        .iter()
        .filter(|badge| !state.has_badge(badge))
        .cloned()
        .collect();

    if points_short == 0 && missing_badges.is_empty() {
        NodeUnlock::Unlocked
    } else {
        NodeUnlock::Locked {
            points_short,
            missing_badges,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use academy_progress::{MemoryStorage, ProgressConfig, ProgressStore};
    use academy_types::NodeId;

    fn store() -> ProgressStore<MemoryStorage> {
        ProgressStore::open(MemoryStorage::new(), ProgressConfig::default())
    }

    fn builtin_node(catalog: &Catalog, id: &str) -> LearningNode {
        catalog.node(&NodeId::from(id)).cloned().unwrap()
    }

    #[test]
    fn first_mint_needs_both_intro_nodes() {
        let catalog = Catalog::builtin().unwrap();
        let first_mint = catalog.badge(&BadgeId::from("first-mint")).unwrap();
        let mut store = store();
        store.mark_node_completed(NodeId::from("start"));
        assert!(!badge_eligible(store.state(), first_mint));
        store.mark_node_completed(NodeId::from("basics"));
        assert!(badge_eligible(store.state(), first_mint));
    }

    #[test]
    fn held_badges_are_not_eligible_again() {
        let catalog = Catalog::builtin().unwrap();
        let mut store = store();
        store.mark_node_completed(NodeId::from("start"));
        store.mark_node_completed(NodeId::from("basics"));
        let ids: Vec<&str> = eligible_badges(store.state(), &catalog)
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, ["first-mint"]);

        store.add_badge(BadgeId::from("first-mint"));
        assert!(eligible_badges(store.state(), &catalog).is_empty());
    }

    #[test]
    fn badge_without_conditions_is_eligible_immediately() {
        let badge = BadgeDefinition {
            id: BadgeId::from("community"),
            name: "Community".to_owned(),
            description: String::new(),
            image: String::new(),
            requirements: Vec::new(),
            required_points: 0,
            required_nodes: Vec::new(),
        };
        assert!(badge_eligible(store().state(), &badge));
    }

    #[test]
    fn node_gate_reports_point_shortfall() {
        let catalog = Catalog::builtin().unwrap();
        let privacy = builtin_node(&catalog, "privacy");
        let mut store = store();
        store.add_points(25);
        assert_eq!(
            node_unlock(store.state(), &privacy),
            NodeUnlock::Locked {
                points_short: 15,
                missing_badges: Vec::new(),
            }
        );
        store.add_points(15);
        assert!(node_unlock(store.state(), &privacy).is_unlocked());
    }

    #[test]
    fn node_gate_reports_missing_badges() {
        let catalog = Catalog::builtin().unwrap();
        let advanced = builtin_node(&catalog, "advanced");
        let mut store = store();
        assert_eq!(
            node_unlock(store.state(), &advanced),
            NodeUnlock::Locked {
                points_short: 0,
                missing_badges: vec![BadgeId::from("key-holder")],
            }
        );
        store.add_badge(BadgeId::from("key-holder"));
        assert_eq!(node_unlock(store.state(), &advanced), NodeUnlock::Unlocked);
    }
}
