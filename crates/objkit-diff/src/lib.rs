//! Structural diff over objkit graphs.
//!
//! [`diff`] compares two graphs and produces a [`Patch`]: a flat mapping
//! from dotted property path to the new value, with `Undefined` marking a
//! removal. [`apply_patch`] replays a patch against a graph through
//! key-path writes, transforming the first graph's shape into the
//! second's.
//!
//! # Example
//!
//! ```
//! use objkit_diff::{diff, Patch};
//! use objkit_graph::{from_json, Value};
//! use serde_json::json;
//!
//! let a = from_json(&json!({"a": 1, "b": 2}));
//! let b = from_json(&json!({"a": 1, "b": 3, "c": 4}));
//! let patch = diff(&a, &b);
//! assert_eq!(patch.len(), 2);
//! assert!(patch.get("b").unwrap().strict_eq(&Value::from(3.0)));
//! assert!(patch.get("c").unwrap().strict_eq(&Value::from(4.0)));
//! ```

pub mod diff;
pub mod patch;

pub use diff::{diff, diff_into};
pub use patch::{apply_patch, Patch};
