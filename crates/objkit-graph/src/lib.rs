//! objkit-graph - the dynamic value model the rest of the workspace operates on.
//!
//! A [`Value`] is an arbitrary object graph: scalar leaves, shared
//! insertion-ordered mappings, shared ordered sequences, and opaque
//! [`Intrinsic`] leaf types (dates, binary buffers, regexps, collections).
//! Containers are reference types, so two values may alias the same
//! underlying object and graphs may be cyclic.
//!
//! # Example
//!
//! ```
//! use objkit_graph::{Value, Shape};
//!
//! let obj = Value::object_from([("a", Value::from(1.0))]);
//! assert_eq!(obj.shape(), Some(Shape::Plain));
//!
//! // Containers compare by identity, not by content.
//! let alias = obj.clone();
//! assert!(obj.strict_eq(&alias));
//! assert!(!obj.strict_eq(&Value::object_from([("a", Value::from(1.0))])));
//! ```

pub mod intrinsic;
pub mod json;
pub mod shape;
pub mod value;

pub use intrinsic::{ElemKind, Intrinsic, IntrinsicKind};
pub use json::{from_json, to_json, JsonError};
pub use shape::Shape;
pub use value::{Obj, Seq, Value};
