//! Deep clone with cycle rehydration.

use std::collections::HashMap;
use std::rc::Rc;

use objkit_graph::value::{Obj, Seq};
use objkit_graph::Value;

/// Source-identity → already-created clone, scoped to one top-level
/// `deep_clone` call. Registering the (possibly still incomplete) clone
/// *before* descending into children is what lets a back-reference to an
/// ancestor resolve to the in-progress clone instead of recursing forever.
#[derive(Default)]
struct CloneRegistry {
    seen: HashMap<usize, Value>,
}

/// Structurally copy an object graph.
///
/// Plain objects and sequences are rebuilt entry by entry; primitives are
/// returned unchanged; intrinsics are shared by reference: their internal
/// state is opaque, so the clone points at the very same leaf. Cyclic and
/// diamond-shaped references are preserved: aliases in the source alias the
/// same clone in the result.
///
/// # Example
///
/// ```
/// use objkit_graph::Value;
/// use objkit_util::{deep_clone, deep_equal};
///
/// let original = Value::object_from([("a", Value::array_from([Value::from(1.0)]))]);
/// let copy = deep_clone(&original);
/// assert!(deep_equal(&original, &copy));
/// assert!(!original.strict_eq(&copy));
///
/// let date = Value::date(0);
/// assert!(deep_clone(&date).strict_eq(&date));
/// ```
pub fn deep_clone(value: &Value) -> Value {
    let mut refs = CloneRegistry::default();
    clone_inner(value, &mut refs)
}

fn clone_inner(value: &Value, refs: &mut CloneRegistry) -> Value {
    match value {
        Value::Array(seq) => {
            let addr = Rc::as_ptr(seq) as usize;
            if let Some(existing) = refs.seen.get(&addr) {
                return existing.clone();
            }
            let target = Rc::new(Seq::new());
            refs.seen.insert(addr, Value::Array(target.clone()));
            for item in seq.to_vec() {
                target.push(clone_inner(&item, refs));
            }
            Value::Array(target)
        }
        Value::Object(obj) => {
            let addr = Rc::as_ptr(obj) as usize;
            if let Some(existing) = refs.seen.get(&addr) {
                return existing.clone();
            }
            let target = Rc::new(Obj::new());
            refs.seen.insert(addr, Value::Object(target.clone()));
            for (key, entry) in obj.entries() {
                target.set(key, clone_inner(&entry, refs));
            }
            Value::Object(target)
        }
        Value::Intrinsic(intrinsic) => Value::Intrinsic(Rc::clone(intrinsic)),
        other => other.clone(),
    }
}
