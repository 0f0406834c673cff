//! Type-safe string identifier wrappers.
//!
//! Paths, badges, learning nodes and mentors are all addressed by short
//! slugs (`"explorer"`, `"first-mint"`, `"mpc"`). Wrapping each kind in its
//! own newtype keeps a badge slug from being passed where a node slug is
//! expected. All wrappers serialize as a bare JSON string so the persisted
//! progress blob stays a flat list of strings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier and return the inner [`String`].
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// Identifier of a learning path (e.g. `explorer`, `builder`, `guardian`).
    PathId
}

define_id! {
    /// Identifier of an achievement badge (e.g. `first-mint`).
    BadgeId
}

define_id! {
    /// Identifier of a completable learning node (e.g. `privacy`).
    NodeId
}

define_id! {
    /// Identifier of a mentor in the community network.
    MentorId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_strings() {
        let badge = BadgeId::new("first-mint");
        let json = serde_json::to_string(&badge).unwrap();
        assert_eq!(json, "\"first-mint\"");
    }

    #[test]
    fn ids_deserialize_from_bare_strings() {
        let node: Result<NodeId, _> = serde_json::from_str("\"mpc\"");
        assert_eq!(node.ok(), Some(NodeId::from("mpc")));
    }

    #[test]
    fn display_matches_inner_value() {
        let path = PathId::from(String::from("guardian"));
        assert_eq!(path.to_string(), "guardian");
        assert_eq!(path.as_str(), "guardian");
        assert_eq!(path.into_inner(), "guardian");
    }
}
