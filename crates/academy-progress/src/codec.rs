//! JSON encoding of the progress blob.
//!
//! Encoding is plain `serde_json`. Decoding is deliberately forgiving: the
//! blob may have been written by an older front end, edited by hand, or
//! truncated by a browser extension. Each field is decoded on its own, so a
//! missing or wrong-typed `mentorStatus` does not cost the learner their
//! points. Only input that is not a JSON object at all is an error.
//!
//! Earlier front ends stored the point total under `eec`; that key is
//! honoured when `points` is absent or unreadable.

use academy_types::{BadgeId, NodeId, PathId};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::DecodeError;
use crate::state::ProgressState;

/// Legacy key of the point total.
const LEGACY_POINTS_KEY: &str = "eec";

/// Serialize `state` to its persisted JSON form.
pub fn encode(state: &ProgressState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Parse a persisted blob, falling back to defaults field by field.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if `raw` is not JSON and
/// [`DecodeError::NotAnObject`] if it is JSON of another shape.
pub fn decode(raw: &str) -> Result<ProgressState, DecodeError> {
    let fields = match serde_json::from_str::<Value>(raw)? {
        Value::Object(fields) => fields,
        other => {
            return Err(DecodeError::NotAnObject {
                found: json_kind(&other),
            });
        }
    };

    let points = field::<u64>(&fields, "points")
        .or_else(|| field::<u64>(&fields, LEGACY_POINTS_KEY))
        .unwrap_or_default();
    let badges = field::<Vec<BadgeId>>(&fields, "badges").unwrap_or_default();
    let current_path = field::<Option<PathId>>(&fields, "currentPath").flatten();
    let completed_nodes = field::<Vec<NodeId>>(&fields, "completedNodes").unwrap_or_default();
    let mentor_status = field::<bool>(&fields, "mentorStatus").unwrap_or_default();

    Ok(ProgressState::from_parts(
        points,
        badges,
        current_path,
        completed_nodes,
        mentor_status,
    ))
}

/// Decode one field, returning `None` when it is absent or malformed.
fn field<T: DeserializeOwned>(fields: &Map<String, Value>, name: &str) -> Option<T> {
    let value = fields.get(name)?;
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(field = name, error = %e, "ignoring malformed progress field");
            None
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn decoded(raw: &str) -> ProgressState {
        decode(raw).unwrap_or_else(|_| {
            ProgressState::from_parts(u64::MAX, Vec::new(), None, Vec::new(), true)
        })
    }

    #[test]
    fn full_blob_is_honoured() {
        let state = decoded(
            r#"{"points":40,"badges":["first-mint"],"currentPath":"builder","completedNodes":["start","basics"],"mentorStatus":true}"#,
        );
        assert_eq!(state.points(), 40);
        assert_eq!(state.badges(), &[BadgeId::from("first-mint")]);
        assert_eq!(state.current_path(), Some(&PathId::from("builder")));
        assert_eq!(state.completed_node_count(), 2);
        assert!(state.mentor_status());
    }

    #[test]
    fn missing_mentor_status_defaults_to_false() {
        let state = decoded(r#"{"points":7,"badges":["a"],"currentPath":"explorer","completedNodes":[]}"#);
        assert!(!state.mentor_status());
        assert_eq!(state.points(), 7);
        assert_eq!(state.badges(), &[BadgeId::from("a")]);
        assert_eq!(state.current_path(), Some(&PathId::from("explorer")));
    }

    #[test]
    fn empty_object_is_default_state() {
        assert_eq!(decoded("{}"), ProgressState::default());
    }

    #[test]
    fn wrong_typed_fields_fall_back_individually() {
        let state = decoded(
            r#"{"points":-3,"badges":"first-mint","currentPath":12,"completedNodes":["start"],"mentorStatus":"yes"}"#,
        );
        assert_eq!(state.points(), 0);
        assert!(state.badges().is_empty());
        assert!(state.current_path().is_none());
        assert_eq!(state.completed_nodes(), &[NodeId::from("start")]);
        assert!(!state.mentor_status());
    }

    #[test]
    fn legacy_points_key_is_accepted() {
        let state = decoded(r#"{"eec":120,"badges":[],"currentPath":null,"completedNodes":[],"mentorStatus":false}"#);
        assert_eq!(state.points(), 120);
    }

    #[test]
    fn points_key_wins_over_legacy_key() {
        let state = decoded(r#"{"points":5,"eec":120}"#);
        assert_eq!(state.points(), 5);
    }

    #[test]
    fn non_json_is_rejected() {
        assert!(matches!(decode("not json {"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(matches!(
            decode("[1,2,3]"),
            Err(DecodeError::NotAnObject { found: "array" })
        ));
        assert!(matches!(
            decode("null"),
            Err(DecodeError::NotAnObject { found: "null" })
        ));
    }

    #[test]
    fn encode_then_decode_preserves_state() {
        let state = ProgressState::from_parts(
            25,
            vec![BadgeId::from("first-mint"), BadgeId::from("key-holder")],
            Some(PathId::from("guardian")),
            vec![NodeId::from("mpc")],
            true,
        );
        let raw = encode(&state).unwrap();
        assert_eq!(decoded(&raw), state);
    }
}
