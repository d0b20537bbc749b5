//! Sequence normalization: one item, several items, or an iterable of
//! items, uniformly coerced into a concrete `Vec<Value>`.

use objkit_graph::{Intrinsic, Value};

/// How textual input is treated by [`get_array_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringHandling {
    /// A string is an iterable of characters.
    Split,
    /// A string is a single atomic item.
    Keep,
}

/// Coerce a single value into an ordered sequence.
///
/// - a sequence yields a shallow copy of its elements;
/// - a string yields its characters under [`StringHandling::Split`], or a
///   one-element sequence under [`StringHandling::Keep`];
/// - iterable collections materialize: a map yields two-element
///   `[key, value]` entry arrays, a set yields its members;
/// - an array-like mapping (a non-negative integral own `length` plus
///   indexed elements) yields its indexed elements;
/// - everything else, `Null` and `Undefined` included, wraps into a
///   one-element sequence.
///
/// # Example
///
/// ```
/// use objkit_graph::Value;
/// use objkit_util::{get_array_of, StringHandling};
///
/// let items = get_array_of(&Value::from("ab"), StringHandling::Split);
/// assert_eq!(items.len(), 2);
/// assert!(items[0].strict_eq(&Value::from("a")));
///
/// let whole = get_array_of(&Value::from("ab"), StringHandling::Keep);
/// assert_eq!(whole.len(), 1);
/// ```
pub fn get_array_of(value: &Value, strings: StringHandling) -> Vec<Value> {
    match value {
        Value::Array(seq) => seq.to_vec(),
        Value::String(s) => match strings {
            StringHandling::Split => s.chars().map(|c| Value::from(c.to_string())).collect(),
            StringHandling::Keep => vec![value.clone()],
        },
        Value::Intrinsic(intrinsic) => match &**intrinsic {
            Intrinsic::Map(entries) => entries
                .borrow()
                .iter()
                .map(|(k, v)| Value::array_from([k.clone(), v.clone()]))
                .collect(),
            Intrinsic::Set(members) => members.borrow().clone(),
            _ => vec![value.clone()],
        },
        Value::Object(obj) => match array_like_len(value) {
            Some(len) => (0..len).map(|i| obj.get(&i.to_string())).collect(),
            None => vec![value.clone()],
        },
        other => vec![other.clone()],
    }
}

/// The variadic fast path: the caller already has a concrete argument
/// list, so no normalization is performed; the arguments are returned
/// positionally.
pub fn array_from_args(args: &[Value]) -> Vec<Value> {
    args.to_vec()
}

fn array_like_len(value: &Value) -> Option<usize> {
    let obj = value.as_object()?;
    match obj.get_opt("length")? {
        Value::Number(n) if n >= 0.0 && n.fract() == 0.0 => Some(n as usize),
        _ => None,
    }
}
