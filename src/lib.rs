//! Arbor Engine
//!
//! A scene-graph binding layer: named entities of a closed kind set live
//! in a registry, frontends reach them through weak handles and
//! callback-style lookups, and a cross-thread notifier carries work from
//! worker threads back to the thread that owns the callbacks.

pub mod bind;
pub mod config;
pub mod engine;
pub mod errors;
pub mod event;
pub mod scene;

// Re-export main types for convenience
pub use bind::{AsyncNotifier, BindManager, NotifyHandle};
pub use config::SystemConfig;
pub use engine::Engine;
pub use errors::{BindError, EngineError, Result};
pub use event::{Event, EventGroup, EventKind, EventManager, SubscriptionId};
pub use scene::{Entity, EntityKind, EntityRef, SceneRegistry};
