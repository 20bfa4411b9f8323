use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::event::{Event, EventKind, EventManager};
use crate::scene::entity::{Entity, EntityCell, EntityKind, EntityRef};

// Internal data structure, protected by a lock.
#[derive(Default)]
struct RegistryInner {
    entities: FxHashMap<String, Arc<EntityCell>>,
}

/// Name-keyed owner of every live scene entity.
///
/// The registry holds the only strong reference to each entity; callers
/// get [`EntityRef`] weak handles and must re-check liveness on every
/// access. Cloning the registry clones the handle, not the contents, so
/// subsystems share one store without a global singleton.
///
/// Creating an entity under a name that is already taken replaces the
/// old entry: the previous entity is dropped and weak handles to it
/// expire. Name uniqueness is this registry's concern alone; callers
/// above it do not enforce it.
#[derive(Clone)]
pub struct SceneRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    events: EventManager,
}

impl SceneRegistry {
    #[must_use]
    pub fn new(events: EventManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner::default())),
            events,
        }
    }

    /// Creates a scene node under `name`.
    pub fn create_node(&self, name: &str) -> EntityRef {
        self.create_entity(name, EntityKind::Node)
    }

    /// Creates a default-initialized entity of `kind` under `name` and
    /// publishes a `Created` event to the kind's group.
    pub fn create_entity(&self, name: &str, kind: EntityKind) -> EntityRef {
        let cell = Arc::new(RwLock::new(Entity::new(name, kind)));
        let weak = Arc::downgrade(&cell);

        let replaced = {
            let mut guard = self.inner.write();
            guard.entities.insert(name.to_string(), cell)
        };

        // Events fire outside the lock so a subscriber may call back in.
        if let Some(old) = replaced {
            let old_kind = old.read().kind();
            log::warn!("entity '{name}' replaced (was {old_kind:?}, now {kind:?})");
            self.events
                .emit(&Event::new(old_kind.group(), EventKind::Removed, name));
        }
        self.events
            .emit(&Event::new(kind.group(), EventKind::Created, name));

        log::trace!("created {kind:?} '{name}'");
        EntityRef::new(weak, kind)
    }

    /// Looks up `name`, returning a weak reference to the entity cell.
    ///
    /// `None` when no entity is registered under the name. A returned
    /// weak reference can still fail to upgrade later.
    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<Weak<EntityCell>> {
        let guard = self.inner.read();
        guard.entities.get(name).map(Arc::downgrade)
    }

    /// Node-flavored alias of [`get_entity`](Self::get_entity); the kind
    /// check happens at the facade above.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<Weak<EntityCell>> {
        self.get_entity(name)
    }

    /// Destroys the entity under `name`. Publishes a `Removed` event and
    /// returns `true` if something was actually removed.
    pub fn remove_entity(&self, name: &str) -> bool {
        let removed = self.inner.write().entities.remove(name);
        match removed {
            Some(cell) => {
                let kind = cell.read().kind();
                drop(cell);
                self.events
                    .emit(&Event::new(kind.group(), EventKind::Removed, name));
                log::trace!("removed {kind:?} '{name}'");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().entities.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().entities.is_empty()
    }

    /// Drops every entity at once. Used on engine shutdown; individual
    /// `Removed` events are not published for a bulk clear.
    pub fn clear(&self) {
        let count = {
            let mut guard = self.inner.write();
            let count = guard.entities.len();
            guard.entities.clear();
            count
        };
        if count > 0 {
            log::debug!("registry cleared, {count} entities dropped");
        }
    }
}
