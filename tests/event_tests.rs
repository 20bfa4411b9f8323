//! Event Manager Integration Tests
//!
//! Tests for:
//! - Per-group subscriber lists: coexistence and ordering
//! - Group isolation and full-payload forwarding
//! - Disconnect semantics and re-entrant subscription

use std::sync::{Arc, Mutex};

use arbor::event::{Event, EventGroup, EventKind, EventManager};

fn node_event(subject: &str) -> Event {
    Event::new(EventGroup::Node, EventKind::Created, subject)
}

// ============================================================================
// Subscriber Lists
// ============================================================================

#[test]
fn two_subscribers_both_receive() {
    let events = EventManager::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second"] {
        let sink = Arc::clone(&seen);
        events.connect(EventGroup::Node, move |_| {
            sink.lock().unwrap().push(tag);
        });
    }

    events.emit(&node_event("root"));

    assert_eq!(seen.lock().unwrap().as_slice(), &["first", "second"]);
}

#[test]
fn subscribers_run_in_registration_order() {
    let events = EventManager::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for i in 0..5 {
        let sink = Arc::clone(&seen);
        events.connect(EventGroup::Geometry, move |_| {
            sink.lock().unwrap().push(i);
        });
    }

    events.emit(&Event::new(EventGroup::Geometry, EventKind::Modified, "mesh"));

    assert_eq!(seen.lock().unwrap().as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn subscriber_count_tracks_connections() {
    let events = EventManager::new();
    assert_eq!(events.subscriber_count(EventGroup::Pass), 0);

    let sub = events.connect(EventGroup::Pass, |_| {});
    events.connect(EventGroup::Pass, |_| {});
    assert_eq!(events.subscriber_count(EventGroup::Pass), 2);

    events.disconnect(sub);
    assert_eq!(events.subscriber_count(EventGroup::Pass), 1);
}

// ============================================================================
// Group Isolation & Payload
// ============================================================================

#[test]
fn other_groups_are_not_invoked() {
    let events = EventManager::new();
    let seen = Arc::new(Mutex::new(0u32));
    let sink = Arc::clone(&seen);

    events.connect(EventGroup::Light, move |_| {
        *sink.lock().unwrap() += 1;
    });

    events.emit(&node_event("root"));
    events.emit(&Event::new(EventGroup::Material, EventKind::Created, "m"));

    assert_eq!(*seen.lock().unwrap(), 0);
}

#[test]
fn full_event_payload_is_forwarded() {
    let events = EventManager::new();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);

    events.connect(EventGroup::Light, move |event| {
        *sink.lock().unwrap() = Some((event.group, event.kind, event.subject.clone()));
    });

    events.emit(&Event::new(EventGroup::Light, EventKind::Removed, "sun"));

    assert_eq!(
        seen.lock().unwrap().take(),
        Some((EventGroup::Light, EventKind::Removed, "sun".to_string()))
    );
}

// ============================================================================
// Disconnect & Re-entrancy
// ============================================================================

#[test]
fn disconnect_stops_delivery() {
    let events = EventManager::new();
    let seen = Arc::new(Mutex::new(0u32));
    let sink = Arc::clone(&seen);

    let sub = events.connect(EventGroup::Node, move |_| {
        *sink.lock().unwrap() += 1;
    });

    events.emit(&node_event("a"));
    assert!(events.disconnect(sub));
    events.emit(&node_event("b"));

    assert_eq!(*seen.lock().unwrap(), 1);
    assert!(!events.disconnect(sub), "second disconnect is a no-op");
}

#[test]
fn connect_inside_callback_does_not_deadlock() {
    let events = EventManager::new();
    let seen = Arc::new(Mutex::new(0u32));

    let inner_events = events.clone();
    let sink = Arc::clone(&seen);
    events.connect(EventGroup::Node, move |_| {
        let inner_sink = Arc::clone(&sink);
        inner_events.connect(EventGroup::Node, move |_| {
            *inner_sink.lock().unwrap() += 1;
        });
    });

    // First emit only runs the connecting subscriber; the one it adds
    // becomes active from the next emit.
    events.emit(&node_event("a"));
    assert_eq!(*seen.lock().unwrap(), 0);

    events.emit(&node_event("b"));
    assert_eq!(*seen.lock().unwrap(), 1);
}
