//! Scene registry and entity model.
//!
//! - [`Entity`]: closed sum type over the supported entity kinds
//! - [`EntityRef`]: weak, kind-verified handle handed out to callers
//! - [`SceneRegistry`]: name-keyed owner of every live entity
//!
//! The registry owns entities outright; everything outside it observes
//! them through weak references that must be re-checked on every access.

pub mod entity;
pub mod geometry;
pub mod light;
pub mod material;
pub mod node;
pub mod registry;

pub use entity::{Entity, EntityCell, EntityKind, EntityRef};
pub use geometry::{
    BoxGeometry, FileGeometry, IndexedFaceSetGeometry, IndexedLineSetGeometry, TextGeometry,
};
pub use light::{Light, LightKind};
pub use material::{ManualMaterial, ManualPass, PbsPass};
pub use node::{Node, Transform};
pub use registry::SceneRegistry;
