//! The recursive differ.

use objkit_graph::{Shape, Value};

use crate::patch::Patch;

/// Compare two graphs and produce the patch that takes `a`'s shape to
/// `b`'s.
///
/// Properties removed in `b` are recorded as `Undefined`; added or changed
/// properties record `b`'s value. Only plain mappings are recursed into
/// (accumulating a dotted path); for every other matching type tag
/// (sequences, dates, binaries, collections) the comparison is strict
/// identity, so two different objects with equal content still read as a
/// change. That is deliberate: content comparison of opaque leaves would
/// cost more than the callers of a patch need.
pub fn diff(a: &Value, b: &Value) -> Patch {
    let mut patch = Patch::new();
    diff_into(a, b, &mut patch, "");
    patch
}

/// The accumulator form: write differences between `a` and `b` into an
/// existing patch, with every recorded path prefixed by `prefix`.
///
/// This is the streaming entry point: a caller may seed the patch and
/// prefix to fold several partial diffs into one.
pub fn diff_into(a: &Value, b: &Value, patch: &mut Patch, prefix: &str) {
    for (prop, ap) in own_entries(a) {
        match own_get(b, &prop) {
            None => {
                // property removed
                patch.insert(format!("{prefix}{prop}"), Value::Undefined);
            }
            Some(bp) => {
                if ap.is_primitive() || bp.is_primitive() {
                    if !ap.strict_eq(&bp) {
                        patch.insert(format!("{prefix}{prop}"), bp);
                    }
                } else {
                    match (ap.shape(), bp.shape()) {
                        (Some(Shape::Plain), Some(Shape::Plain)) => {
                            diff_into(&ap, &bp, patch, &format!("{prefix}{prop}."));
                        }
                        (Some(at), Some(bt)) if at != bt => {
                            // property changed to another type: replace wholesale
                            patch.insert(format!("{prefix}{prop}"), bp);
                        }
                        _ => {
                            if !ap.strict_eq(&bp) {
                                patch.insert(format!("{prefix}{prop}"), bp);
                            }
                        }
                    }
                }
            }
        }
    }
    for (prop, bp) in own_entries(b) {
        if own_get(a, &prop).is_none() {
            // property added
            patch.insert(format!("{prefix}{prop}"), bp);
        }
    }
}

/// Own-enumerable entries: object entries, or sequence elements under
/// their stringified indices. Everything else enumerates nothing.
fn own_entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(obj) => obj.entries(),
        Value::Array(seq) => seq
            .to_vec()
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

fn own_get(value: &Value, key: &str) -> Option<Value> {
    match value {
        Value::Object(obj) => obj.get_opt(key),
        Value::Array(seq) => match key.parse::<usize>() {
            Ok(index) if index < seq.len() => Some(seq.get(index)),
            _ => None,
        },
        _ => None,
    }
}
