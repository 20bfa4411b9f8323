//! Scene Registry Integration Tests
//!
//! Tests for:
//! - Entity creation, lookup and removal through the registry
//! - Weak-handle expiry on removal and replacement
//! - Event publication for registry mutations

use std::sync::{Arc, Mutex};

use arbor::event::{EventGroup, EventKind, EventManager};
use arbor::scene::{Entity, EntityKind, SceneRegistry};

fn new_registry() -> SceneRegistry {
    SceneRegistry::new(EventManager::new())
}

type Seen = Arc<Mutex<Vec<(EventGroup, EventKind, String)>>>;

fn recording_registry() -> (SceneRegistry, Seen) {
    let events = EventManager::new();
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    for group in [
        EventGroup::Node,
        EventGroup::Light,
        EventGroup::Geometry,
        EventGroup::Material,
        EventGroup::Pass,
    ] {
        let sink = Arc::clone(&seen);
        events.connect(group, move |event| {
            sink.lock()
                .unwrap()
                .push((event.group, event.kind, event.subject.clone()));
        });
    }
    (SceneRegistry::new(events), seen)
}

// ============================================================================
// Creation & Lookup
// ============================================================================

#[test]
fn create_registers_name() {
    let registry = new_registry();
    registry.create_node("root");
    assert!(registry.contains("root"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn create_returns_live_ref() {
    let registry = new_registry();
    let entity_ref = registry.create_entity("sun", EntityKind::Light);

    assert_eq!(entity_ref.kind(), EntityKind::Light);
    let cell = entity_ref.upgrade().expect("freshly created entity is live");
    let guard = cell.read();
    assert!(matches!(&*guard, Entity::Light(light) if light.name() == "sun"));
}

#[test]
fn get_entity_absent_is_none() {
    let registry = new_registry();
    assert!(registry.get_entity("ghost").is_none());
}

#[test]
fn get_entity_returns_upgradable_weak() {
    let registry = new_registry();
    registry.create_entity("crate", EntityKind::BoxGeometry);

    let weak = registry.get_entity("crate").expect("name is registered");
    let cell = weak.upgrade().expect("entity is owned by the registry");
    assert_eq!(cell.read().kind(), EntityKind::BoxGeometry);
}

// ============================================================================
// Expiry: Removal & Replacement
// ============================================================================

#[test]
fn removed_entity_expires_weak_refs() {
    let registry = new_registry();
    let entity_ref = registry.create_node("temp");

    assert!(registry.remove_entity("temp"));
    assert!(entity_ref.is_expired());
    assert!(entity_ref.upgrade().is_none());
    assert!(!registry.remove_entity("temp"), "second remove is a no-op");
}

#[test]
fn replacing_name_expires_old_refs() {
    let registry = new_registry();
    let old_ref = registry.create_node("avatar");

    let new_ref = registry.create_entity("avatar", EntityKind::Light);

    assert!(old_ref.upgrade().is_none(), "old handle must expire");
    assert!(new_ref.upgrade().is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn clear_empties_registry() {
    let registry = new_registry();
    registry.create_node("a");
    registry.create_entity("b", EntityKind::PbsPass);

    registry.clear();

    assert!(registry.is_empty());
    assert!(registry.get_entity("a").is_none());
}

// ============================================================================
// Event Publication
// ============================================================================

#[test]
fn create_publishes_created_event() {
    let (registry, seen) = recording_registry();
    registry.create_node("root");

    let events = seen.lock().unwrap();
    assert_eq!(
        events.as_slice(),
        &[(EventGroup::Node, EventKind::Created, "root".to_string())]
    );
}

#[test]
fn remove_publishes_removed_event() {
    let (registry, seen) = recording_registry();
    registry.create_entity("sun", EntityKind::Light);
    registry.remove_entity("sun");

    let events = seen.lock().unwrap();
    assert_eq!(
        events.last(),
        Some(&(EventGroup::Light, EventKind::Removed, "sun".to_string()))
    );
}

#[test]
fn replace_publishes_removed_then_created() {
    let (registry, seen) = recording_registry();
    registry.create_node("avatar");
    registry.create_entity("avatar", EntityKind::Light);

    let events = seen.lock().unwrap();
    assert_eq!(
        events.as_slice(),
        &[
            (EventGroup::Node, EventKind::Created, "avatar".to_string()),
            (EventGroup::Node, EventKind::Removed, "avatar".to_string()),
            (EventGroup::Light, EventKind::Created, "avatar".to_string()),
        ]
    );
}

#[test]
fn each_kind_publishes_into_its_group() {
    let (registry, seen) = recording_registry();
    for (i, kind) in EntityKind::ALL.into_iter().enumerate() {
        registry.create_entity(&format!("e{i}"), kind);
    }

    let events = seen.lock().unwrap();
    assert_eq!(events.len(), EntityKind::ALL.len());
    for (event, kind) in events.iter().zip(EntityKind::ALL) {
        assert_eq!(event.0, kind.group());
        assert_eq!(event.1, EventKind::Created);
    }
}
