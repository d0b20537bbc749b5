//! The flat patch type and its application.

use indexmap::IndexMap;

use objkit_graph::Value;
use objkit_keypath::{set_by_key_path, KeyPath, KeyPathError};

/// A flat mapping from dotted property path to patched value.
///
/// `Undefined` marks a removed property; any other value is an addition
/// or a change. Entries keep discovery order.
#[derive(Debug, Default)]
pub struct Patch {
    entries: IndexMap<String, Value>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, value: Value) {
        self.entries.insert(path.into(), value);
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Whether the path is recorded as removed.
    pub fn is_removed(&self, path: &str) -> bool {
        matches!(self.entries.get(path), Some(Value::Undefined))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

/// Replay a patch against `root`: each entry becomes a key-path write,
/// with `Undefined` entries deleting.
///
/// Applying `diff(a, b)` to (a clone of) `a` reproduces `b`'s
/// own-enumerable-property shape at every recorded path.
pub fn apply_patch(patch: &Patch, root: &Value) -> Result<(), KeyPathError> {
    for (path, value) in patch.iter() {
        set_by_key_path(root, &KeyPath::One(path.clone()), value.clone())?;
    }
    Ok(())
}
