//! objkit - structural utilities for dynamically-shaped object graphs.
//!
//! The pieces, leaves first:
//!
//! - [`graph`] — the [`Value`] model: scalars, shared containers, opaque
//!   intrinsic leaves, type classification.
//! - [`util`] — sequence normalization, [`deep_clone`] (cycle-preserving,
//!   intrinsic-sharing), [`deep_equal`], small collection helpers.
//! - [`keypath`] — dotted-path reads, writes and deletes, batch mode.
//! - [`diff`] — the structural differ, with its flat [`Patch`] type and
//!   [`apply_patch`].
//! - [`events`] — the named-event dispatcher with chained and isolated
//!   firing.
//!
//! # Example
//!
//! ```
//! use objkit::{diff, from_json, Value};
//! use serde_json::json;
//!
//! let before = from_json(&json!({"a": {"x": 1}}));
//! let after = from_json(&json!({"a": {"x": 2}}));
//! let patch = diff(&before, &after);
//! assert!(patch.get("a.x").unwrap().strict_eq(&Value::from(2.0)));
//! ```

pub use objkit_events as events;
pub use objkit_graph as graph;
pub use objkit_keypath as keypath;
pub use objkit_util as util;

// The headline surface, flattened.
pub use objkit_diff::{apply_patch, diff, diff_into, Patch};
pub use objkit_events::{ChainFunction, EventError, EventSpec, Events, FireFn, TaskQueue};
pub use objkit_graph::{from_json, to_json, Intrinsic, IntrinsicKind, JsonError, Shape, Value};
pub use objkit_keypath::{
    delete_by_key_path, get_by_key_path, set_by_key_path, KeyPath, KeyPathError,
};
pub use objkit_util::{
    array_from_args, deep_clone, deep_equal, flatten, get_array_of, get_unique_array, has_own,
    shallow_clone, GraphFuzzer, StringHandling,
};
