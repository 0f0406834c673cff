//! Built-in academy catalog.
//!
//! Three learning paths, two badges, five learning nodes and four mentors:
//! the content the academy site ships with when `academy-config.yaml` does
//! not override the `catalog` section.
//!
//! Node rewards are 20 points each, matching the explorer path's 240 points
//! over 12 challenges.

use academy_types::{
    BadgeDefinition, BadgeId, LearningNode, LearningPath, Mentor, MentorId, NodeId, PathId,
};

/// Path selected for callers that ask for a default.
pub const DEFAULT_PATH: &str = "explorer";

/// Points awarded per built-in learning node.
const NODE_REWARD: u64 = 20;

/// Helper to build a [`LearningPath`].
fn path(id: &str, title: &str, description: &str, challenges: u32, reward_points: u64) -> LearningPath {
    LearningPath {
        id: PathId::from(id),
        title: title.to_owned(),
        description: description.to_owned(),
        challenges,
        reward_points,
    }
}

/// Helper to build a [`LearningNode`].
fn node(id: &str, title: &str, required_points: u64, required_badges: &[&str]) -> LearningNode {
    LearningNode {
        id: NodeId::from(id),
        title: title.to_owned(),
        description: format!(
            "Learn about {} through interactive challenges and hands-on exercises.",
            title.to_lowercase()
        ),
        reward_points: NODE_REWARD,
        required_points,
        required_badges: required_badges.iter().copied().map(BadgeId::from).collect(),
    }
}

/// Helper to build a [`Mentor`].
fn mentor(id: &str, name: &str, expertise: &str, rating: f64, available: bool) -> Mentor {
    Mentor {
        id: MentorId::from(id),
        name: name.to_owned(),
        expertise: expertise.to_owned(),
        rating,
        available,
    }
}

/// Identifier of the built-in default path.
pub fn default_path() -> PathId {
    PathId::from(DEFAULT_PATH)
}

/// The built-in learning paths.
pub fn paths() -> Vec<LearningPath> {
    vec![
        path(
            "explorer",
            "Explorer Path",
            "Dive deep into C-SPL (Confidential Solana Program Library) and learn how to build \
             privacy-preserving applications on Solana.",
            12,
            240,
        ),
        path(
            "builder",
            "Builder Path",
            "Master DApp development with MXES and learn to deploy scalable decentralized \
             applications with advanced cryptographic features.",
            15,
            300,
        ),
        path(
            "guardian",
            "Guardian Path",
            "Become an expert in MPC, Cerberus, and Manticore protocols. Learn advanced privacy \
             and security implementations.",
            18,
            360,
        ),
    ]
}

/// The built-in badges.
pub fn badges() -> Vec<BadgeDefinition> {
    vec![
        BadgeDefinition {
            id: BadgeId::from("first-mint"),
            name: "First-Mint".to_owned(),
            description: "Awarded for creating your first C-SPL token".to_owned(),
            image: "resources/badge-first-mint.png".to_owned(),
            requirements: vec![
                "Complete C-SPL basics course".to_owned(),
                "Deploy a simple token contract".to_owned(),
                "Pass the minting challenge".to_owned(),
            ],
            required_points: 0,
            required_nodes: vec![NodeId::from("start"), NodeId::from("basics")],
        },
        BadgeDefinition {
            id: BadgeId::from("key-holder"),
            name: "Key-Holder".to_owned(),
            description: "Master of cryptographic key management".to_owned(),
            image: "resources/badge-key-holder.png".to_owned(),
            requirements: vec![
                "Complete Shamir-split challenge".to_owned(),
                "Demonstrate key recovery".to_owned(),
                "Pass security audit".to_owned(),
            ],
            required_points: 80,
            required_nodes: vec![NodeId::from("privacy"), NodeId::from("mpc")],
        },
    ]
}

/// The built-in learning nodes, in curriculum order.
pub fn nodes() -> Vec<LearningNode> {
    vec![
        node("start", "Start Learning", 0, &[]),
        node("basics", "Web3 Basics", 0, &[]),
        node("privacy", "Privacy 101", 40, &[]),
        node("mpc", "MPC Introduction", 60, &[]),
        node("advanced", "Advanced Topics", 0, &["key-holder"]),
    ]
}

/// The built-in mentor network.
pub fn mentors() -> Vec<Mentor> {
    vec![
        mentor("alex-chen", "Alex Chen", "MPC & Privacy", 4.9, true),
        mentor("sarah-rodriguez", "Sarah Rodriguez", "C-SPL Development", 4.8, true),
        mentor("michael-kim", "Michael Kim", "Smart Contracts", 4.7, false),
        mentor("emma-thompson", "Emma Thompson", "DeFi Protocols", 4.9, true),
    ]
}
