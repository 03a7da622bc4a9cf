//! Value-tree adapters - build `Node` trees from external source data.
//!
//! The renderer only accepts fully materialized trees; these helpers are
//! the collaborator side of that contract. Anything that can be expressed
//! as null / scalar / sequence / mapping can be rendered.

use serde_json::Value;

use crate::error::RenderError;
use crate::types::Node;

/// Convert a parsed JSON document into a value tree.
///
/// Booleans and numbers become scalars holding their canonical text form;
/// object member order is preserved as-is (document order).
pub fn from_json(value: &Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Scalar(b.to_string()),
        Value::Number(n) => Node::Scalar(n.to_string()),
        Value::String(s) => Node::Scalar(s.clone()),
        Value::Array(items) => Node::Sequence(items.iter().map(from_json).collect()),
        Value::Object(map) => Node::Mapping(
            map.iter()
                .map(|(key, value)| (key.clone(), from_json(value)))
                .collect(),
        ),
    }
}

/// Parse a JSON document and convert it into a value tree.
pub fn from_json_str(input: &str) -> Result<Node, RenderError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| RenderError::InvalidInput(e.to_string()))?;
    Ok(from_json(&value))
}

/// Capture the process environment as a mapping of scalars.
///
/// Entries are sorted by name so repeated captures render identically.
pub fn from_env() -> Node {
    let mut entries: Vec<(String, String)> = std::env::vars().collect();
    entries.sort();
    Node::Mapping(
        entries
            .into_iter()
            .map(|(name, value)| (name, Node::Scalar(value)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_and_null() {
        assert_eq!(from_json_str("null").unwrap(), Node::Null);
        assert_eq!(from_json_str("true").unwrap(), Node::scalar("true"));
        assert_eq!(from_json_str("42").unwrap(), Node::scalar("42"));
        assert_eq!(from_json_str(r#""hi""#).unwrap(), Node::scalar("hi"));
    }

    #[test]
    fn test_object_order_is_preserved() {
        let tree = from_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = match &tree {
            Node::Mapping(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            other => panic!("expected mapping, got {:?}", other),
        };
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = from_json_str("{nope").unwrap_err();
        assert!(matches!(err, RenderError::InvalidInput(_)));
    }

    #[test]
    fn test_env_capture_is_sorted() {
        std::env::set_var("VDUMP_TEST_VAR", "1");
        let tree = from_env();
        let keys: Vec<String> = match tree {
            Node::Mapping(entries) => entries.into_iter().map(|(k, _)| k).collect(),
            other => panic!("expected mapping, got {:?}", other),
        };
        assert!(keys.iter().any(|k| k == "VDUMP_TEST_VAR"));
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
