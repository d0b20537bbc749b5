//! Key-path addressing over objkit graphs.
//!
//! A key path locates a nested value: a plain property name, a dotted
//! string (`"a.b.c"`), or an ordered batch of such strings. The empty path
//! denotes the root itself.
//!
//! Reads of missing paths are `Undefined`, never an error. Writes create
//! plain-object intermediates as needed; writing `Undefined` deletes; a
//! frozen or non-container root is a silent no-op. A property literally
//! named `"a.b"` is addressed before the string is interpreted as a nested
//! path.
//!
//! # Example
//!
//! ```
//! use objkit_graph::Value;
//! use objkit_keypath::{get_by_key_path, set_by_key_path, delete_by_key_path};
//!
//! let root = Value::new_object();
//! set_by_key_path(&root, &"a.b.c".into(), Value::from(5.0)).unwrap();
//! assert!(get_by_key_path(&root, &"a.b.c".into()).strict_eq(&Value::from(5.0)));
//!
//! delete_by_key_path(&root, &"a.b.c".into());
//! assert!(get_by_key_path(&root, &"a.b.c".into()).is_undefined());
//! assert!(get_by_key_path(&root, &"a.b".into()).as_object().is_some());
//! ```

use objkit_graph::Value;
use objkit_util::has_own;
use thiserror::Error;

/// A path descriptor: one path, or an ordered batch of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPath {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        KeyPath::One(path.to_string())
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        KeyPath::One(path)
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(paths: Vec<String>) -> Self {
        KeyPath::Many(paths)
    }
}

impl From<&[&str]> for KeyPath {
    fn from(paths: &[&str]) -> Self {
        KeyPath::Many(paths.iter().map(|p| p.to_string()).collect())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    /// Batch-mode paths were given a value that is not a sequence.
    #[error("BATCH_VALUE_NOT_SEQUENCE")]
    BatchValueNotSequence,
    /// Batch-mode path and value sequences differ in length.
    #[error("BATCH_LENGTH_MISMATCH")]
    BatchLengthMismatch,
}

/// Read the value at `path`.
///
/// A batch path reads positionally and returns a sequence of results.
pub fn get_by_key_path(root: &Value, path: &KeyPath) -> Value {
    match path {
        KeyPath::One(p) => get_one(root, p),
        KeyPath::Many(paths) => Value::array_from(paths.iter().map(|p| get_one(root, p))),
    }
}

/// Write `value` at `path`, creating plain-object intermediates as needed.
///
/// Writing `Undefined` deletes: when the parent is a sequence and the leaf
/// segment parses as an index, the element is spliced out (shifting the
/// rest), otherwise the property is removed. Frozen containers and
/// non-container roots are silent no-ops.
///
/// A batch path takes a sequence value of equal length and writes
/// positionally.
pub fn set_by_key_path(root: &Value, path: &KeyPath, value: Value) -> Result<(), KeyPathError> {
    match path {
        KeyPath::One(p) => {
            set_one(root, p, value);
            Ok(())
        }
        KeyPath::Many(paths) => {
            let seq = value
                .as_array()
                .ok_or(KeyPathError::BatchValueNotSequence)?;
            let values = seq.to_vec();
            if values.len() != paths.len() {
                return Err(KeyPathError::BatchLengthMismatch);
            }
            for (p, v) in paths.iter().zip(values) {
                set_one(root, p, v);
            }
            Ok(())
        }
    }
}

/// Delete the value at `path` (one or many). Missing paths are no-ops.
pub fn delete_by_key_path(root: &Value, path: &KeyPath) {
    match path {
        KeyPath::One(p) => set_one(root, p, Value::Undefined),
        KeyPath::Many(paths) => {
            for p in paths {
                set_one(root, p, Value::Undefined);
            }
        }
    }
}

fn get_one(obj: &Value, key_path: &str) -> Value {
    // A full-string own-property match wins over dotted interpretation.
    if has_own(obj, key_path) {
        return get_own(obj, key_path);
    }
    if key_path.is_empty() {
        return obj.clone();
    }
    if let Some(dot) = key_path.find('.') {
        let inner = get_own(obj, &key_path[..dot]);
        return if inner.is_undefined() {
            Value::Undefined
        } else {
            get_one(&inner, &key_path[dot + 1..])
        };
    }
    Value::Undefined
}

fn set_one(obj: &Value, key_path: &str, value: Value) {
    match obj {
        Value::Object(map) if !map.is_frozen() => {}
        Value::Array(seq) if !seq.is_frozen() => {}
        _ => return,
    }
    if let Some(dot) = key_path.find('.') {
        let current = &key_path[..dot];
        let rest = &key_path[dot + 1..];
        if rest.is_empty() {
            // trailing dot: operate on the segment before it
            if value.is_undefined() {
                remove_own(obj, current);
            } else {
                set_own(obj, current, value);
            }
        } else {
            let mut inner = get_own(obj, current);
            if !inner.is_truthy() {
                inner = Value::new_object();
                set_own(obj, current, inner.clone());
            }
            set_one(&inner, rest, value);
        }
    } else if value.is_undefined() {
        remove_own(obj, key_path);
    } else {
        set_own(obj, key_path, value);
    }
}

fn get_own(value: &Value, key: &str) -> Value {
    match value {
        Value::Object(obj) => obj.get(key),
        Value::Array(seq) => {
            if key == "length" {
                return Value::Number(seq.len() as f64);
            }
            match key.parse::<usize>() {
                Ok(index) => seq.get(index),
                Err(_) => Value::Undefined,
            }
        }
        _ => Value::Undefined,
    }
}

fn set_own(target: &Value, key: &str, value: Value) {
    match target {
        Value::Object(obj) => {
            obj.set(key, value);
        }
        Value::Array(seq) => {
            if let Ok(index) = key.parse::<usize>() {
                if index < seq.len() {
                    seq.set(index, value);
                } else {
                    // pad sparse writes the way indexed assignment would
                    while seq.len() < index {
                        seq.push(Value::Undefined);
                    }
                    seq.push(value);
                }
            }
        }
        _ => {}
    }
}

fn remove_own(target: &Value, key: &str) {
    match target {
        Value::Object(obj) => {
            obj.remove(key);
        }
        Value::Array(seq) => {
            if let Ok(index) = key.parse::<usize>() {
                seq.splice_remove(index);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> KeyPath {
        KeyPath::from(p)
    }

    #[test]
    fn test_get_missing_is_undefined() {
        let root = Value::new_object();
        assert!(get_by_key_path(&root, &path("a")).is_undefined());
        assert!(get_by_key_path(&root, &path("a.b.c")).is_undefined());
    }

    #[test]
    fn test_empty_path_is_root() {
        let root = Value::object_from([("a", Value::from(1.0))]);
        assert!(get_by_key_path(&root, &path("")).strict_eq(&root));
    }

    #[test]
    fn test_set_creates_intermediates() {
        let root = Value::new_object();
        set_by_key_path(&root, &path("a.b.c"), Value::from(5.0)).unwrap();
        assert!(get_by_key_path(&root, &path("a.b.c")).strict_eq(&Value::from(5.0)));
        assert!(get_by_key_path(&root, &path("a.b")).as_object().is_some());
    }

    #[test]
    fn test_roundtrip() {
        let root = Value::new_object();
        set_by_key_path(&root, &path("x.y"), Value::from("v")).unwrap();
        assert!(get_by_key_path(&root, &path("x.y")).strict_eq(&Value::from("v")));
    }

    #[test]
    fn test_set_undefined_deletes() {
        let root = Value::new_object();
        set_by_key_path(&root, &path("a.b.c"), Value::from(5.0)).unwrap();
        set_by_key_path(&root, &path("a.b.c"), Value::Undefined).unwrap();
        assert!(get_by_key_path(&root, &path("a.b.c")).is_undefined());
        // the intermediate container survives
        let b = get_by_key_path(&root, &path("a.b"));
        assert!(b.as_object().map(|o| o.is_empty()).unwrap_or(false));
    }

    #[test]
    fn test_literal_dotted_property_short_circuits_reads() {
        let root = Value::object_from([("a.b", Value::from("flat"))]);
        // a nested write goes through a fresh intermediate...
        set_by_key_path(&root, &path("a.b"), Value::from("nested")).unwrap();
        // ...but reads resolve the literal own property first
        assert!(get_by_key_path(&root, &path("a.b")).strict_eq(&Value::from("flat")));
        assert!(get_by_key_path(&root, &path("a")).as_object().is_some());
    }

    #[test]
    fn test_nested_value_read_through_dotted_path() {
        let inner = Value::object_from([("city", Value::from("Umeå"))]);
        let root = Value::object_from([("address", inner)]);
        assert!(get_by_key_path(&root, &path("address.city")).strict_eq(&Value::from("Umeå")));
    }

    #[test]
    fn test_array_index_paths() {
        let root = Value::object_from([(
            "items",
            Value::array_from([Value::from("a"), Value::from("b")]),
        )]);
        assert!(get_by_key_path(&root, &path("items.0")).strict_eq(&Value::from("a")));
        assert!(get_by_key_path(&root, &path("items.length")).strict_eq(&Value::from(2.0)));
        set_by_key_path(&root, &path("items.1"), Value::from("B")).unwrap();
        assert!(get_by_key_path(&root, &path("items.1")).strict_eq(&Value::from("B")));
    }

    #[test]
    fn test_deleting_array_element_splices() {
        let root = Value::object_from([(
            "items",
            Value::array_from([Value::from("a"), Value::from("b"), Value::from("c")]),
        )]);
        delete_by_key_path(&root, &path("items.1"));
        let items = get_by_key_path(&root, &path("items"));
        let seq = items.as_array().expect("array");
        assert_eq!(seq.len(), 2);
        assert!(seq.get(1).strict_eq(&Value::from("c")));
    }

    #[test]
    fn test_batch_get() {
        let root = Value::object_from([("a", Value::from(1.0)), ("b", Value::from(2.0))]);
        let out = get_by_key_path(&root, &KeyPath::from(&["a", "b", "missing"][..]));
        let seq = out.as_array().expect("array");
        assert!(seq.get(0).strict_eq(&Value::from(1.0)));
        assert!(seq.get(1).strict_eq(&Value::from(2.0)));
        assert!(seq.get(2).is_undefined());
    }

    #[test]
    fn test_batch_set_positional() {
        let root = Value::new_object();
        set_by_key_path(
            &root,
            &KeyPath::from(&["a", "b.c"][..]),
            Value::array_from([Value::from(1.0), Value::from(2.0)]),
        )
        .unwrap();
        assert!(get_by_key_path(&root, &path("a")).strict_eq(&Value::from(1.0)));
        assert!(get_by_key_path(&root, &path("b.c")).strict_eq(&Value::from(2.0)));
    }

    #[test]
    fn test_batch_length_mismatch_is_an_error() {
        let root = Value::new_object();
        let err = set_by_key_path(
            &root,
            &KeyPath::from(&["a", "b"][..]),
            Value::array_from([Value::from(1.0)]),
        )
        .unwrap_err();
        assert_eq!(err, KeyPathError::BatchLengthMismatch);
    }

    #[test]
    fn test_batch_set_requires_sequence_value() {
        let root = Value::new_object();
        let err = set_by_key_path(&root, &KeyPath::from(&["a"][..]), Value::from(1.0)).unwrap_err();
        assert_eq!(err, KeyPathError::BatchValueNotSequence);
    }

    #[test]
    fn test_write_into_frozen_root_is_silent_noop() {
        let root = Value::object_from([("a", Value::from(1.0))]);
        root.freeze();
        set_by_key_path(&root, &path("a"), Value::from(2.0)).unwrap();
        set_by_key_path(&root, &path("b.c"), Value::from(3.0)).unwrap();
        assert!(get_by_key_path(&root, &path("a")).strict_eq(&Value::from(1.0)));
        assert!(get_by_key_path(&root, &path("b")).is_undefined());
    }

    #[test]
    fn test_write_into_non_container_root_is_noop() {
        set_by_key_path(&Value::from(5.0), &path("a"), Value::from(1.0)).unwrap();
        set_by_key_path(&Value::Null, &path("a"), Value::from(1.0)).unwrap();
    }

    #[test]
    fn test_falsy_intermediate_is_replaced() {
        let root = Value::object_from([("a", Value::from(0.0))]);
        set_by_key_path(&root, &path("a.b"), Value::from(1.0)).unwrap();
        assert!(get_by_key_path(&root, &path("a.b")).strict_eq(&Value::from(1.0)));
    }

    #[test]
    fn test_truthy_non_container_intermediate_is_not_replaced() {
        let root = Value::object_from([("a", Value::from(5.0))]);
        set_by_key_path(&root, &path("a.b"), Value::from(1.0)).unwrap();
        // cannot write through a scalar; the scalar stays
        assert!(get_by_key_path(&root, &path("a")).strict_eq(&Value::from(5.0)));
        assert!(get_by_key_path(&root, &path("a.b")).is_undefined());
    }

    #[test]
    fn test_trailing_dot_addresses_preceding_segment() {
        let root = Value::new_object();
        set_by_key_path(&root, &path("a."), Value::from(1.0)).unwrap();
        assert!(get_by_key_path(&root, &path("a")).strict_eq(&Value::from(1.0)));
        set_by_key_path(&root, &path("a."), Value::Undefined).unwrap();
        assert!(get_by_key_path(&root, &path("a")).is_undefined());
    }
}
