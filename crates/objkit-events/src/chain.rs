//! Chain functions: how subscribers fold into one fire function.

use std::rc::Rc;

use objkit_graph::Value;

/// A fire function / subscriber callback. Returning [`stop`] from a
/// subscriber halts propagation in a stoppable chain; any other return
/// value is passed through as the chain's result.
pub type FireFn = Rc<dyn Fn(&[Value]) -> Value>;

thread_local! {
    static NOP: FireFn = Rc::new(|_: &[Value]| Value::Undefined);
}

/// The shared no-op fire function every event starts from.
pub fn nop() -> FireFn {
    NOP.with(|f| f.clone())
}

/// Whether `f` is the shared no-op.
pub fn is_nop(f: &FireFn) -> bool {
    NOP.with(|n| Rc::ptr_eq(n, f))
}

/// The stop-propagation signal a subscriber returns to halt a stoppable
/// chain.
pub fn stop() -> Value {
    Value::Bool(false)
}

/// How a new subscriber composes onto the current fire function.
///
/// Folding happens on subscribe (one `combine` step) and again from
/// scratch on unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainFunction {
    /// Call the later-registered subscriber first; proceed to the earlier
    /// chain only when it does not signal stop.
    #[default]
    ReverseStoppable,
    /// Leave the fire function untouched; the event's default does all the
    /// work. Used by isolated events, whose default schedules every
    /// subscriber itself.
    Mirror,
}

impl ChainFunction {
    /// One fold step: the fire function with `f2` composed onto `f1`.
    pub fn combine(&self, f1: FireFn, f2: FireFn) -> FireFn {
        match self {
            ChainFunction::Mirror => f1,
            ChainFunction::ReverseStoppable => {
                if is_nop(&f1) {
                    return f2;
                }
                Rc::new(move |args: &[Value]| {
                    if matches!(f2(args), Value::Bool(false)) {
                        return Value::Undefined;
                    }
                    f1(args)
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_nop_is_shared() {
        assert!(is_nop(&nop()));
        let other: FireFn = Rc::new(|_: &[Value]| Value::Undefined);
        assert!(!is_nop(&other));
    }

    #[test]
    fn test_combine_onto_nop_is_the_subscriber_itself() {
        let cb: FireFn = Rc::new(|_: &[Value]| Value::from(1.0));
        let combined = ChainFunction::ReverseStoppable.combine(nop(), cb.clone());
        assert!(Rc::ptr_eq(&combined, &cb));
    }

    #[test]
    fn test_reverse_order_and_stop() {
        let calls = Rc::new(RefCell::new(Vec::new()));

        let c1 = calls.clone();
        let first: FireFn = Rc::new(move |_: &[Value]| {
            c1.borrow_mut().push("first");
            Value::Undefined
        });
        let c2 = calls.clone();
        let second: FireFn = Rc::new(move |_: &[Value]| {
            c2.borrow_mut().push("second");
            stop()
        });

        let chain = ChainFunction::ReverseStoppable;
        let fire = chain.combine(chain.combine(nop(), first), second);
        fire(&[]);

        // the later-composed callback ran first and stopped the chain
        assert_eq!(*calls.borrow(), vec!["second"]);
    }

    #[test]
    fn test_result_of_earliest_subscriber_flows_out() {
        let first: FireFn = Rc::new(|_: &[Value]| Value::from("result"));
        let second: FireFn = Rc::new(|_: &[Value]| Value::Undefined);
        let chain = ChainFunction::ReverseStoppable;
        let fire = chain.combine(chain.combine(nop(), first), second);
        assert!(fire(&[]).strict_eq(&Value::from("result")));
    }

    #[test]
    fn test_mirror_leaves_fire_unchanged() {
        let base: FireFn = Rc::new(|_: &[Value]| Value::from(7.0));
        let cb: FireFn = Rc::new(|_: &[Value]| Value::from(9.0));
        let combined = ChainFunction::Mirror.combine(base.clone(), cb);
        assert!(Rc::ptr_eq(&combined, &base));
    }
}
