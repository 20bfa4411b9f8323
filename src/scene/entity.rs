use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::event::EventGroup;
use crate::scene::geometry::{
    BoxGeometry, FileGeometry, IndexedFaceSetGeometry, IndexedLineSetGeometry, TextGeometry,
};
use crate::scene::light::Light;
use crate::scene::material::{ManualMaterial, ManualPass, PbsPass};
use crate::scene::node::Node;

/// Shared ownership cell for a registry-owned entity.
///
/// The registry holds the only `Arc`; everyone else gets [`EntityRef`].
pub type EntityCell = RwLock<Entity>;

/// Discriminant for the closed set of entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Node,
    Light,
    TextGeometry,
    IndexedFaceSetGeometry,
    IndexedLineSetGeometry,
    BoxGeometry,
    FileGeometry,
    ManualMaterial,
    PbsPass,
    ManualPass,
}

impl EntityKind {
    /// The event group this kind publishes into.
    #[must_use]
    pub fn group(self) -> EventGroup {
        match self {
            Self::Node => EventGroup::Node,
            Self::Light => EventGroup::Light,
            Self::TextGeometry
            | Self::IndexedFaceSetGeometry
            | Self::IndexedLineSetGeometry
            | Self::BoxGeometry
            | Self::FileGeometry => EventGroup::Geometry,
            Self::ManualMaterial => EventGroup::Material,
            Self::PbsPass | Self::ManualPass => EventGroup::Pass,
        }
    }

    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 10] = [
        Self::Node,
        Self::Light,
        Self::TextGeometry,
        Self::IndexedFaceSetGeometry,
        Self::IndexedLineSetGeometry,
        Self::BoxGeometry,
        Self::FileGeometry,
        Self::ManualMaterial,
        Self::PbsPass,
        Self::ManualPass,
    ];
}

/// A scene entity: exactly one kind out of a closed set.
///
/// Lookups return the whole variant; callers pattern-match to reach the
/// payload they expect, which makes the "wrong kind" case explicit at
/// the match site instead of a runtime cast.
#[derive(Debug, Clone)]
pub enum Entity {
    Node(Node),
    Light(Light),
    TextGeometry(TextGeometry),
    IndexedFaceSetGeometry(IndexedFaceSetGeometry),
    IndexedLineSetGeometry(IndexedLineSetGeometry),
    BoxGeometry(BoxGeometry),
    FileGeometry(FileGeometry),
    ManualMaterial(ManualMaterial),
    PbsPass(PbsPass),
    ManualPass(ManualPass),
}

impl Entity {
    /// Creates a default-initialized entity of `kind` under `name`.
    #[must_use]
    pub fn new(name: &str, kind: EntityKind) -> Self {
        match kind {
            EntityKind::Node => Self::Node(Node::new(name)),
            EntityKind::Light => Self::Light(Light::new(name)),
            EntityKind::TextGeometry => Self::TextGeometry(TextGeometry::new(name)),
            EntityKind::IndexedFaceSetGeometry => {
                Self::IndexedFaceSetGeometry(IndexedFaceSetGeometry::new(name))
            }
            EntityKind::IndexedLineSetGeometry => {
                Self::IndexedLineSetGeometry(IndexedLineSetGeometry::new(name))
            }
            EntityKind::BoxGeometry => Self::BoxGeometry(BoxGeometry::new(name)),
            EntityKind::FileGeometry => Self::FileGeometry(FileGeometry::new(name)),
            EntityKind::ManualMaterial => Self::ManualMaterial(ManualMaterial::new(name)),
            EntityKind::PbsPass => Self::PbsPass(PbsPass::new(name)),
            EntityKind::ManualPass => Self::ManualPass(ManualPass::new(name)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Node(_) => EntityKind::Node,
            Self::Light(_) => EntityKind::Light,
            Self::TextGeometry(_) => EntityKind::TextGeometry,
            Self::IndexedFaceSetGeometry(_) => EntityKind::IndexedFaceSetGeometry,
            Self::IndexedLineSetGeometry(_) => EntityKind::IndexedLineSetGeometry,
            Self::BoxGeometry(_) => EntityKind::BoxGeometry,
            Self::FileGeometry(_) => EntityKind::FileGeometry,
            Self::ManualMaterial(_) => EntityKind::ManualMaterial,
            Self::PbsPass(_) => EntityKind::PbsPass,
            Self::ManualPass(_) => EntityKind::ManualPass,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Node(e) => e.name(),
            Self::Light(e) => e.name(),
            Self::TextGeometry(e) => e.name(),
            Self::IndexedFaceSetGeometry(e) => e.name(),
            Self::IndexedLineSetGeometry(e) => e.name(),
            Self::BoxGeometry(e) => e.name(),
            Self::FileGeometry(e) => e.name(),
            Self::ManualMaterial(e) => e.name(),
            Self::PbsPass(e) => e.name(),
            Self::ManualPass(e) => e.name(),
        }
    }
}

/// Weak, kind-verified handle to a registry-owned entity.
///
/// Holding one never keeps the entity alive. [`upgrade`](Self::upgrade)
/// must be called before every access and can fail at any time, e.g.
/// after the entity was removed or replaced in the registry.
#[derive(Debug, Clone)]
pub struct EntityRef {
    weak: Weak<EntityCell>,
    kind: EntityKind,
}

impl EntityRef {
    pub(crate) fn new(weak: Weak<EntityCell>, kind: EntityKind) -> Self {
        Self { weak, kind }
    }

    /// The kind this handle was verified against at lookup time.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Attempts to pin the entity. `None` once it has been destroyed.
    #[must_use]
    pub fn upgrade(&self) -> Option<Arc<EntityCell>> {
        self.weak.upgrade()
    }

    /// `true` once the entity behind this handle is gone.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.weak.strong_count() == 0
    }
}
