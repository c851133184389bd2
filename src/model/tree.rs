//! The generic document tree produced by serialization.
//!
//! Trees are plain `serde_json` values; a higher layer renders them into
//! the final JSON-LD text.

/// A scalar, an IRI string, or a composite produced by a nested entity.
pub type TreeValue = serde_json::Value;

/// The object form of a [`TreeValue`].
pub type TreeMap = serde_json::Map<String, TreeValue>;

/// Human-readable name of a tree node's shape, for diagnostics.
pub fn type_name(tree: &TreeValue) -> &'static str {
    match tree {
        TreeValue::Null => "null",
        TreeValue::Bool(_) => "boolean",
        TreeValue::Number(_) => "number",
        TreeValue::String(_) => "string",
        TreeValue::Array(_) => "array",
        TreeValue::Object(_) => "object",
    }
}
