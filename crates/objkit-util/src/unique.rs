//! Order-preserving dedup under strict equality.

use objkit_graph::Value;

/// Drop duplicate items, keeping the first occurrence of each.
///
/// Duplicates are decided by strict (identity) equality, so two distinct
/// but structurally identical containers are both kept.
pub fn get_unique_array(items: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        if !out.iter().any(|existing| existing.strict_eq(item)) {
            out.push(item.clone());
        }
    }
    out
}
