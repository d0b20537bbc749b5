//! Per-event state: subscriber list and the composed fire function.

use std::cell::RefCell;
use std::rc::Rc;

use objkit_graph::Value;

use crate::chain::{ChainFunction, FireFn};

/// One named event: its ordered subscribers, its chain function, its
/// default fire function, and the current composed fire function.
///
/// Subscribing composes incrementally (one fold step); unsubscribing
/// rebuilds the fire function from scratch by re-folding the remaining
/// subscribers onto the default.
pub struct EventContext {
    pub(crate) chain: ChainFunction,
    pub(crate) default_fn: FireFn,
    pub(crate) subscribers: RefCell<Vec<FireFn>>,
    pub(crate) fire: RefCell<FireFn>,
}

impl EventContext {
    pub fn new(chain: ChainFunction, default_fn: FireFn) -> Rc<Self> {
        Rc::new(Self {
            chain,
            fire: RefCell::new(default_fn.clone()),
            default_fn,
            subscribers: RefCell::new(Vec::new()),
        })
    }

    /// Append a subscriber. A callback already present (same shared
    /// callable) is not re-added.
    pub fn subscribe(&self, callback: FireFn) {
        let present = self
            .subscribers
            .borrow()
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &callback));
        if present {
            return;
        }
        self.subscribers.borrow_mut().push(callback.clone());
        let current = self.fire.borrow().clone();
        *self.fire.borrow_mut() = self.chain.combine(current, callback);
    }

    /// Remove a subscriber; a callback that was never subscribed is a
    /// no-op. The fire function is re-folded from the default.
    pub fn unsubscribe(&self, callback: &FireFn) {
        self.subscribers
            .borrow_mut()
            .retain(|existing| !Rc::ptr_eq(existing, callback));
        let rebuilt = self
            .subscribers
            .borrow()
            .iter()
            .cloned()
            .fold(self.default_fn.clone(), |acc, cb| {
                self.chain.combine(acc, cb)
            });
        *self.fire.borrow_mut() = rebuilt;
    }

    /// Invoke the current composed fire function.
    pub fn fire(&self, args: &[Value]) -> Value {
        // clone the callable out so a subscriber may re-enter
        let fire = self.fire.borrow().clone();
        fire(args)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub(crate) fn subscribers_snapshot(&self) -> Vec<FireFn> {
        self.subscribers.borrow().clone()
    }
}
