//! objkit-events - a named-event registry with composable fire functions.
//!
//! Each event folds its subscribers into a single callable through a
//! [`ChainFunction`]. The default chain calls the most recently subscribed
//! callback first and stops when one returns the stop signal. Events
//! registered with the `"asap"` marker instead fire each subscriber on its
//! own deferred continuation, isolated from its siblings and from the
//! firer.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use objkit_events::{Events, FireFn};
//! use objkit_graph::Value;
//!
//! let events = Events::with_events(["changed"]);
//! let cb: FireFn = Rc::new(|args: &[Value]| {
//!     assert!(args[0].strict_eq(&Value::from(1.0)));
//!     Value::Undefined
//! });
//! events.subscribe("changed", cb).unwrap();
//! events.fire("changed", &[Value::from(1.0)]).unwrap();
//! ```

pub mod chain;
pub mod context;
pub mod events;
pub mod queue;

use thiserror::Error;

pub use chain::{nop, stop, ChainFunction, FireFn};
pub use context::EventContext;
pub use events::{EventSpec, Events, ASAP};
pub use queue::TaskQueue;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// An event was configured with something that is neither a chained
    /// pair nor the `"asap"` marker.
    #[error("INVALID_EVENT_CONFIG: {0}")]
    InvalidArgument(String),
    /// The named event was never registered.
    #[error("UNKNOWN_EVENT: {0}")]
    UnknownEvent(String),
}
