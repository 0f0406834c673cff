//! The validated academy catalog.
//!
//! A [`Catalog`] is built once from [`CatalogConfig`] and is read-only
//! afterwards. Construction checks that identifiers are unique per kind and
//! that every cross-reference (badge -> node, node -> badge, default path)
//! points at a defined entry. Lookups never fall back to a default entry.

use std::collections::BTreeSet;

use academy_types::{
    BadgeDefinition, BadgeId, LearningNode, LearningPath, Mentor, MentorId, NodeId, PathId,
};

use crate::config::{CatalogConfig, ConfigError};

/// Paths, badges, nodes and mentors known to the academy.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    default_path: PathId,
    paths: Vec<LearningPath>,
    badges: Vec<BadgeDefinition>,
    nodes: Vec<LearningNode>,
    mentors: Vec<Mentor>,
}

impl Catalog {
    /// Build and validate a catalog from its configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] on duplicate identifiers or on a
    /// reference to an undefined path, badge, or node.
    pub fn from_config(config: CatalogConfig) -> Result<Self, ConfigError> {
        let CatalogConfig {
            default_path,
            paths,
            badges,
            nodes,
            mentors,
        } = config;

        let path_ids = unique_ids("path", paths.iter().map(|p| p.id.as_str()))?;
        let badge_ids = unique_ids("badge", badges.iter().map(|b| b.id.as_str()))?;
        let node_ids = unique_ids("node", nodes.iter().map(|n| n.id.as_str()))?;
        unique_ids("mentor", mentors.iter().map(|m| m.id.as_str()))?;

        if !path_ids.contains(default_path.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "default path '{default_path}' is not a defined path"
            )));
        }

        for badge in &badges {
            if let Some(missing) = badge
                .required_nodes
                .iter()
                .find(|n| !node_ids.contains(n.as_str()))
            {
                return Err(ConfigError::Invalid(format!(
                    "badge '{}' requires undefined node '{missing}'",
                    badge.id
                )));
            }
        }

        for node in &nodes {
            if let Some(missing) = node
                .required_badges
                .iter()
                .find(|b| !badge_ids.contains(b.as_str()))
            {
                return Err(ConfigError::Invalid(format!(
                    "node '{}' requires undefined badge '{missing}'",
                    node.id
                )));
            }
        }

        Ok(Self {
            default_path,
            paths,
            badges,
            nodes,
            mentors,
        })
    }

    /// The built-in catalog.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in data itself is inconsistent.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_config(CatalogConfig::default())
    }

    /// Path suggested when the learner has not chosen one.
    pub const fn default_path(&self) -> &PathId {
        &self.default_path
    }

    /// Look up a learning path.
    pub fn path(&self, id: &PathId) -> Option<&LearningPath> {
        self.paths.iter().find(|p| p.id == *id)
    }

    /// Look up a badge definition.
    pub fn badge(&self, id: &BadgeId) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|b| b.id == *id)
    }

    /// Look up a learning node.
    pub fn node(&self, id: &NodeId) -> Option<&LearningNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Look up a mentor.
    pub fn mentor(&self, id: &MentorId) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.id == *id)
    }

    /// All paths, in configuration order.
    pub fn paths(&self) -> &[LearningPath] {
        &self.paths
    }

    /// All badge definitions, in configuration order.
    pub fn badges(&self) -> &[BadgeDefinition] {
        &self.badges
    }

    /// All learning nodes, in curriculum order.
    pub fn nodes(&self) -> &[LearningNode] {
        &self.nodes
    }

    /// All mentors, in configuration order.
    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    /// Mentors currently accepting requests.
    pub fn available_mentors(&self) -> impl Iterator<Item = &Mentor> {
        self.mentors.iter().filter(|m| m.available)
    }
}

/// Collect ids into a set, rejecting the first duplicate.
fn unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<BTreeSet<&'a str>, ConfigError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::Invalid(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(seen)
}
