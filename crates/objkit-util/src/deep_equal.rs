//! Structural equality for acyclic graphs.

use std::rc::Rc;

use objkit_graph::Value;

/// Deep structural equality.
///
/// Scalars compare by value (`NaN != NaN`, as under strict equality),
/// sequences element-wise, mappings by key set regardless of insertion
/// order, and intrinsics by identity only: two distinct date objects
/// holding the same instant are *not* deep-equal, matching the diff
/// algorithm's view of them.
///
/// Does not terminate on cyclic input; cyclic structures should be
/// compared through their identities instead.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let xs = x.to_vec();
            let ys = y.to_vec();
            xs.len() == ys.len() && xs.iter().zip(&ys).all(|(xi, yi)| deep_equal(xi, yi))
        }
        (Value::Object(x), Value::Object(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            if x.len() != y.len() {
                return false;
            }
            x.entries().iter().all(|(key, xv)| match y.get_opt(key) {
                Some(yv) => deep_equal(xv, &yv),
                None => false,
            })
        }
        (Value::Intrinsic(x), Value::Intrinsic(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}
