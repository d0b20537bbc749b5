//! One-level flattening of nested sequences.

use objkit_graph::Value;

/// Flatten one level: sequence items are spliced in, everything else is
/// kept as-is.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(seq) => out.extend(seq.to_vec()),
            other => out.push(other.clone()),
        }
    }
    out
}
