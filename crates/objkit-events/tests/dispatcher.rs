use std::cell::RefCell;
use std::rc::Rc;

use objkit_events::{stop, ChainFunction, EventSpec, Events, FireFn};
use objkit_graph::Value;

fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, halt: bool) -> FireFn {
    let log = log.clone();
    Rc::new(move |_: &[Value]| {
        log.borrow_mut().push(name);
        if halt {
            stop()
        } else {
            Value::Undefined
        }
    })
}

#[test]
fn test_most_recent_subscriber_fires_first() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let events = Events::with_events(["changed"]);
    events.subscribe("changed", recording(&log, "first", false)).unwrap();
    events.subscribe("changed", recording(&log, "second", false)).unwrap();

    events.fire("changed", &[]).unwrap();
    assert_eq!(*log.borrow(), vec!["second", "first"]);
}

#[test]
fn test_stop_signal_halts_propagation() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let events = Events::with_events(["changed"]);
    events.subscribe("changed", recording(&log, "first", false)).unwrap();
    events.subscribe("changed", recording(&log, "stopper", true)).unwrap();

    events.fire("changed", &[]).unwrap();
    assert_eq!(*log.borrow(), vec!["stopper"]);
}

#[test]
fn test_arguments_reach_every_subscriber() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let events = Events::with_events(["changed"]);
    for _ in 0..2 {
        let seen = seen.clone();
        let cb: FireFn = Rc::new(move |args: &[Value]| {
            seen.borrow_mut().push(args[0].clone());
            Value::Undefined
        });
        events.subscribe("changed", cb).unwrap();
    }

    events.fire("changed", &[Value::from("payload")]).unwrap();
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|v| v.strict_eq(&Value::from("payload"))));
}

#[test]
fn test_asap_subscribers_are_isolated_from_each_other() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let events = Events::new();
    events
        .add_configured_events([("storage".to_string(), EventSpec::Marker("asap".to_string()))])
        .unwrap();

    let panicking: FireFn = Rc::new(|_: &[Value]| panic!("subscriber failure"));
    events.subscribe("storage", panicking).unwrap();
    events.subscribe("storage", recording(&log, "survivor", false)).unwrap();

    // firing neither runs subscribers nor panics
    events.fire("storage", &[]).unwrap();
    assert!(log.borrow().is_empty());

    // the panicking continuation is contained; its sibling still runs
    assert_eq!(events.run_pending(), 2);
    assert_eq!(*log.borrow(), vec!["survivor"]);
}

#[test]
fn test_asap_fire_snapshots_arguments_per_subscriber() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let events = Events::new();
    events.add_asap_event("ping");
    let s = seen.clone();
    let cb: FireFn = Rc::new(move |args: &[Value]| {
        s.borrow_mut().push(args.to_vec());
        Value::Undefined
    });
    events.subscribe("ping", cb).unwrap();

    events.fire("ping", &[Value::from(1.0)]).unwrap();
    events.fire("ping", &[Value::from(2.0)]).unwrap();
    events.run_pending();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0][0].strict_eq(&Value::from(1.0)));
    assert!(seen[1][0].strict_eq(&Value::from(2.0)));
}

#[test]
fn test_asap_subscribing_mid_flight_does_not_affect_scheduled_fire() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let events = Events::new();
    events.add_asap_event("ping");
    events.subscribe("ping", recording(&log, "original", false)).unwrap();

    events.fire("ping", &[]).unwrap();
    // subscribed after the fire: not part of the snapshot
    events.subscribe("ping", recording(&log, "latecomer", false)).unwrap();

    events.run_pending();
    assert_eq!(*log.borrow(), vec!["original"]);
}

#[test]
fn test_mixed_registration() {
    let events = Events::new();
    events
        .add_configured_events([
            (
                "reading".to_string(),
                EventSpec::Chained {
                    chain: ChainFunction::ReverseStoppable,
                    default_fn: None,
                },
            ),
            ("ready".to_string(), EventSpec::Marker("asap".to_string())),
        ])
        .unwrap();

    assert!(events.event("reading").is_some());
    assert!(events.event("ready").is_some());
    assert!(events.event("other").is_none());
}

#[test]
fn test_unsubscribed_callback_no_longer_fires() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let events = Events::with_events(["changed"]);
    let cb = recording(&log, "cb", false);
    events.subscribe("changed", cb.clone()).unwrap();
    events.unsubscribe("changed", &cb).unwrap();
    events.fire("changed", &[]).unwrap();
    assert!(log.borrow().is_empty());
}
