//! Binding Facade
//!
//! [`BindManager`] is the surface a scripting frontend binds against:
//! create/lookup pairs for every entity kind, the session user node
//! lookup, and event subscription. It owns nothing — the registry, the
//! event manager and the configuration are injected at construction and
//! shared with whoever else holds them.
//!
//! # Lookup contract
//!
//! Every `get_*` operation resolves synchronously on the calling thread
//! and reports through the completion callback exactly once:
//!
//! - name absent or entity already destroyed → `Err(BindError::NotFound)`
//! - entity present but of another kind → `Err(BindError::WrongKind)`
//! - otherwise → `Ok(EntityRef)` verified against the requested kind
//!
//! The `bool` return value mirrors the callback outcome; both channels
//! are kept for compatibility with the original API shape.

use std::path::Path;
use std::sync::Arc;

use crate::config::SystemConfig;
use crate::errors::BindError;
use crate::event::{Event, EventGroup, EventManager, SubscriptionId};
use crate::scene::{EntityKind, EntityRef, SceneRegistry};

pub struct BindManager {
    scene: SceneRegistry,
    events: EventManager,
    config: Arc<SystemConfig>,
}

impl BindManager {
    /// Assembles a facade over the given subsystems.
    #[must_use]
    pub fn new(scene: SceneRegistry, events: EventManager, config: Arc<SystemConfig>) -> Self {
        Self {
            scene,
            events,
            config,
        }
    }

    // ========================================================================
    // Event subscription
    // ========================================================================

    /// Registers `callback` for events of `group`. Callbacks receive the
    /// full event: group, kind and subject name.
    pub fn connect_event(
        &self,
        group: EventGroup,
        callback: impl Fn(&Event) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.events.connect(group, callback)
    }

    /// Removes an event subscription.
    pub fn disconnect_event(&self, sub: SubscriptionId) -> bool {
        self.events.disconnect(sub)
    }

    // ========================================================================
    // Configuration accessors
    // ========================================================================

    /// The config directory the engine was started from.
    #[must_use]
    pub fn folder_path(&self) -> &Path {
        self.config.folder_path()
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    pub fn create_node(&self, name: &str) -> EntityRef {
        self.scene.create_node(name)
    }

    pub fn get_node(&self, name: &str, done: impl FnOnce(Result<EntityRef, BindError>)) -> bool {
        self.lookup(name, EntityKind::Node, done)
    }

    /// Looks up the node reserved for this session's user. The name is
    /// read from the session configuration at call time, never supplied
    /// by the caller.
    pub fn get_user_node(&self, done: impl FnOnce(Result<EntityRef, BindError>)) -> bool {
        let name = self
            .config
            .session()
            .generated_unique_user_node_name()
            .to_owned();
        self.lookup(&name, EntityKind::Node, done)
    }

    // ========================================================================
    // Lights
    // ========================================================================

    pub fn create_light(&self, name: &str) -> EntityRef {
        self.scene.create_entity(name, EntityKind::Light)
    }

    pub fn get_light(&self, name: &str, done: impl FnOnce(Result<EntityRef, BindError>)) -> bool {
        self.lookup(name, EntityKind::Light, done)
    }

    // ========================================================================
    // Geometries
    // ========================================================================

    pub fn create_text(&self, name: &str) -> EntityRef {
        self.scene.create_entity(name, EntityKind::TextGeometry)
    }

    pub fn get_text(&self, name: &str, done: impl FnOnce(Result<EntityRef, BindError>)) -> bool {
        self.lookup(name, EntityKind::TextGeometry, done)
    }

    pub fn create_indexed_face_set(&self, name: &str) -> EntityRef {
        self.scene
            .create_entity(name, EntityKind::IndexedFaceSetGeometry)
    }

    pub fn get_indexed_face_set(
        &self,
        name: &str,
        done: impl FnOnce(Result<EntityRef, BindError>),
    ) -> bool {
        self.lookup(name, EntityKind::IndexedFaceSetGeometry, done)
    }

    pub fn create_indexed_line_set(&self, name: &str) -> EntityRef {
        self.scene
            .create_entity(name, EntityKind::IndexedLineSetGeometry)
    }

    pub fn get_indexed_line_set(
        &self,
        name: &str,
        done: impl FnOnce(Result<EntityRef, BindError>),
    ) -> bool {
        self.lookup(name, EntityKind::IndexedLineSetGeometry, done)
    }

    pub fn create_box(&self, name: &str) -> EntityRef {
        self.scene.create_entity(name, EntityKind::BoxGeometry)
    }

    pub fn get_box(&self, name: &str, done: impl FnOnce(Result<EntityRef, BindError>)) -> bool {
        self.lookup(name, EntityKind::BoxGeometry, done)
    }

    pub fn create_file_geometry(&self, name: &str) -> EntityRef {
        self.scene.create_entity(name, EntityKind::FileGeometry)
    }

    pub fn get_file_geometry(
        &self,
        name: &str,
        done: impl FnOnce(Result<EntityRef, BindError>),
    ) -> bool {
        self.lookup(name, EntityKind::FileGeometry, done)
    }

    // ========================================================================
    // Materials and passes
    // ========================================================================

    pub fn create_manual_material(&self, name: &str) -> EntityRef {
        self.scene.create_entity(name, EntityKind::ManualMaterial)
    }

    pub fn get_manual_material(
        &self,
        name: &str,
        done: impl FnOnce(Result<EntityRef, BindError>),
    ) -> bool {
        self.lookup(name, EntityKind::ManualMaterial, done)
    }

    pub fn create_pbs_pass(&self, name: &str) -> EntityRef {
        self.scene.create_entity(name, EntityKind::PbsPass)
    }

    pub fn get_pbs_pass(&self, name: &str, done: impl FnOnce(Result<EntityRef, BindError>)) -> bool {
        self.lookup(name, EntityKind::PbsPass, done)
    }

    pub fn create_manual_pass(&self, name: &str) -> EntityRef {
        self.scene.create_entity(name, EntityKind::ManualPass)
    }

    pub fn get_manual_pass(
        &self,
        name: &str,
        done: impl FnOnce(Result<EntityRef, BindError>),
    ) -> bool {
        self.lookup(name, EntityKind::ManualPass, done)
    }

    // ========================================================================
    // Lookup core
    // ========================================================================

    /// Resolves `name` against the registry and verifies the kind.
    ///
    /// `done` runs exactly once before this returns. The return value
    /// duplicates the callback outcome.
    fn lookup(
        &self,
        name: &str,
        want: EntityKind,
        done: impl FnOnce(Result<EntityRef, BindError>),
    ) -> bool {
        let Some(weak) = self.scene.get_entity(name) else {
            done(Err(BindError::NotFound));
            return false;
        };
        // Re-check liveness: the entry can expire between lookup and use.
        let Some(cell) = weak.upgrade() else {
            done(Err(BindError::NotFound));
            return false;
        };
        let found = cell.read().kind();
        if found != want {
            log::debug!("lookup '{name}': wanted {want:?}, found {found:?}");
            done(Err(BindError::WrongKind));
            return false;
        }
        done(Ok(EntityRef::new(weak, want)));
        true
    }
}
