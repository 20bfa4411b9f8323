//! Engine Core Module
//!
//! This module contains [`Engine`], the assembly point of the binding
//! layer. It owns no global state: configuration, event routing and the
//! scene registry are constructed at start and handed out as shared
//! handles, allowing the engine to be driven by different frontends
//! (scripting bindings, native samples, tests).
//!
//! # Lifecycle
//!
//! 1. [`Engine::start`] loads configuration from a directory and brings
//!    up the subsystems
//! 2. [`Engine::bind_manager`] assembles facades for frontends
//! 3. [`Engine::stop`] shuts down and drops every scene entity
//!
//! Dropping a running engine stops it.

use std::path::Path;
use std::sync::Arc;

use crate::bind::BindManager;
use crate::config::SystemConfig;
use crate::errors::Result;
use crate::event::EventManager;
use crate::scene::SceneRegistry;

pub struct Engine {
    config: Arc<SystemConfig>,
    events: EventManager,
    scene: SceneRegistry,
    blocking: bool,
    running: bool,
}

impl Engine {
    /// Starts the engine with configuration loaded from `config_dir`.
    ///
    /// The `blocking` flag is recorded and forwarded to the embedder
    /// verbatim; the engine itself runs no loop of its own. A missing
    /// config directory is tolerated (defaults apply), a malformed
    /// config file is not.
    ///
    /// # Errors
    ///
    /// Returns an error if a present configuration file cannot be read
    /// or parsed.
    pub fn start(config_dir: impl AsRef<Path>, blocking: bool) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config = Arc::new(SystemConfig::load(config_dir)?);
        let events = EventManager::new();
        let scene = SceneRegistry::new(events.clone());

        log::info!(
            "engine started (config: {}, participant: {}, blocking: {blocking})",
            config.folder_path().display(),
            config.session().participant(),
        );

        Ok(Self {
            config,
            events,
            scene,
            blocking,
            running: true,
        })
    }

    /// Stops the engine and drops every scene entity. Idempotent.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.scene.clear();
        log::info!("engine stopped");
    }

    /// Assembles a binding facade sharing this engine's subsystems.
    #[must_use]
    pub fn bind_manager(&self) -> BindManager {
        BindManager::new(
            self.scene.clone(),
            self.events.clone(),
            Arc::clone(&self.config),
        )
    }

    #[inline]
    #[must_use]
    pub fn scene(&self) -> &SceneRegistry {
        &self.scene
    }

    #[inline]
    #[must_use]
    pub fn events(&self) -> &EventManager {
        &self.events
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the embedder asked for blocking startup. Opaque to the
    /// engine; forwarded as given to `start`.
    #[inline]
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.blocking
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}
