//! One-level container copy.

use objkit_graph::Value;

/// Copy the top-level container; children stay shared.
///
/// Primitives and intrinsics are returned as-is.
pub fn shallow_clone(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::object_from(obj.entries()),
        Value::Array(seq) => Value::array_from(seq.to_vec()),
        other => other.clone(),
    }
}
