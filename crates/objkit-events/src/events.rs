//! The dispatcher: a registry of named events over one task queue.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use objkit_graph::Value;

use crate::chain::{nop, ChainFunction, FireFn};
use crate::context::EventContext;
use crate::queue::TaskQueue;
use crate::EventError;

/// The registration-time marker selecting isolated (deferred) firing.
pub const ASAP: &str = "asap";

/// Configuration for one event in [`Events::add_configured_events`].
pub enum EventSpec {
    /// A chained event: an explicit chain function and an optional default
    /// fire function (the shared no-op when absent).
    Chained {
        chain: ChainFunction,
        default_fn: Option<FireFn>,
    },
    /// A marker string; only [`ASAP`] is valid.
    Marker(String),
}

/// A named-event registry.
///
/// Chained events fire synchronously in the caller's stack. Isolated
/// (`"asap"`) events enqueue one continuation per subscriber onto the
/// dispatcher's [`TaskQueue`]; nothing runs until [`Events::run_pending`].
pub struct Events {
    events: RefCell<IndexMap<String, Rc<EventContext>>>,
    queue: Rc<TaskQueue>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(IndexMap::new()),
            queue: Rc::new(TaskQueue::new()),
        }
    }

    /// A dispatcher with the given event names pre-registered as default
    /// chained events.
    pub fn with_events<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let events = Self::new();
        for name in names {
            events.add_event_type(name, None, None);
        }
        events
    }

    /// Register (or replace) a chained event type. Omitted parts fall back
    /// to the stoppable chain and the shared no-op default.
    pub fn add_event_type(
        &self,
        name: impl Into<String>,
        chain: Option<ChainFunction>,
        default_fn: Option<FireFn>,
    ) -> Rc<EventContext> {
        let context = EventContext::new(chain.unwrap_or_default(), default_fn.unwrap_or_else(nop));
        self.events.borrow_mut().insert(name.into(), context.clone());
        context
    }

    /// Bulk registration from name → spec pairs. The [`ASAP`] marker
    /// builds an isolated event; any other marker is a configuration
    /// error and aborts the remaining registrations.
    pub fn add_configured_events(
        &self,
        specs: impl IntoIterator<Item = (String, EventSpec)>,
    ) -> Result<(), EventError> {
        for (name, spec) in specs {
            match spec {
                EventSpec::Chained { chain, default_fn } => {
                    self.add_event_type(name, Some(chain), default_fn);
                }
                EventSpec::Marker(marker) if marker == ASAP => {
                    self.add_asap_event(name);
                }
                EventSpec::Marker(other) => {
                    return Err(EventError::InvalidArgument(other));
                }
            }
        }
        Ok(())
    }

    /// Register an isolated event: firing snapshots the subscriber list
    /// and schedules each subscriber, with its own copy of the arguments,
    /// as an independent continuation in registration order.
    pub fn add_asap_event(&self, name: impl Into<String>) -> Rc<EventContext> {
        let queue = Rc::clone(&self.queue);
        let context = Rc::new_cyclic(|weak: &Weak<EventContext>| {
            let weak = weak.clone();
            let default_fn: FireFn = Rc::new(move |args: &[Value]| {
                if let Some(context) = weak.upgrade() {
                    for subscriber in context.subscribers_snapshot() {
                        let args = args.to_vec();
                        queue.push(move || {
                            subscriber(&args);
                        });
                    }
                }
                Value::Undefined
            });
            EventContext {
                chain: ChainFunction::Mirror,
                fire: RefCell::new(default_fn.clone()),
                default_fn,
                subscribers: RefCell::new(Vec::new()),
            }
        });
        self.events.borrow_mut().insert(name.into(), context.clone());
        context
    }

    /// Look up an event's context.
    pub fn event(&self, name: &str) -> Option<Rc<EventContext>> {
        self.events.borrow().get(name).cloned()
    }

    pub fn subscribe(&self, event: &str, callback: FireFn) -> Result<(), EventError> {
        self.context(event)?.subscribe(callback);
        Ok(())
    }

    pub fn unsubscribe(&self, event: &str, callback: &FireFn) -> Result<(), EventError> {
        self.context(event)?.unsubscribe(callback);
        Ok(())
    }

    /// Fire an event. Chained events return the chain's result; isolated
    /// events return `Undefined` before their subscribers have run.
    pub fn fire(&self, event: &str, args: &[Value]) -> Result<Value, EventError> {
        Ok(self.context(event)?.fire(args))
    }

    /// Drain the deferred queue; returns the number of continuations run.
    pub fn run_pending(&self) -> usize {
        self.queue.run_pending()
    }

    /// Number of continuations currently pending.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    fn context(&self, event: &str) -> Result<Rc<EventContext>, EventError> {
        self.event(event)
            .ok_or_else(|| EventError::UnknownEvent(event.to_string()))
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}
