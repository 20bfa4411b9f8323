//! System Configuration
//!
//! Loaded once at engine start from the config directory handed to
//! [`Engine::start`](crate::engine::Engine::start). The directory may
//! contain a `session.json`; anything missing falls back to defaults so a
//! bare directory is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::{EngineError, Result};

/// File name looked up inside the config directory.
const SESSION_FILE: &str = "session.json";

/// On-disk session settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Prefix for the generated unique user node name.
    pub user_node_prefix: String,
    /// Participant role of this process in a shared session.
    pub participant: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            user_node_prefix: "user".to_string(),
            participant: "local".to_string(),
        }
    }
}

/// Session state derived at engine start.
///
/// The user node name is generated exactly once per engine start, so every
/// participant in a shared scene gets a distinct node name even when all
/// of them load identical settings files.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    participant: String,
    generated_unique_user_node_name: String,
}

impl SessionConfig {
    fn from_settings(settings: &SessionSettings) -> Self {
        let generated_unique_user_node_name =
            format!("{}-{}", settings.user_node_prefix, Uuid::new_v4().simple());
        Self {
            participant: settings.participant.clone(),
            generated_unique_user_node_name,
        }
    }

    /// The participant role from the settings file (`"local"` by default).
    #[must_use]
    pub fn participant(&self) -> &str {
        &self.participant
    }

    /// The unique node name reserved for this session's user avatar.
    #[must_use]
    pub fn generated_unique_user_node_name(&self) -> &str {
        &self.generated_unique_user_node_name
    }
}

/// Immutable system configuration shared across subsystems.
#[derive(Debug, Clone)]
pub struct SystemConfig {
    folder_path: PathBuf,
    session: SessionConfig,
}

impl SystemConfig {
    /// Loads configuration from `dir`.
    ///
    /// A missing directory or a missing `session.json` yields defaults; a
    /// present but unreadable or malformed file is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let file = dir.join(SESSION_FILE);
        let settings = if file.is_file() {
            let text = fs::read_to_string(&file).map_err(|source| EngineError::ConfigRead {
                path: file.clone(),
                source,
            })?;
            serde_json::from_str::<SessionSettings>(&text)?
        } else {
            log::debug!("no {SESSION_FILE} in {}, using defaults", dir.display());
            SessionSettings::default()
        };

        Ok(Self {
            folder_path: dir.to_path_buf(),
            session: SessionConfig::from_settings(&settings),
        })
    }

    /// The config directory this configuration was loaded from.
    #[must_use]
    pub fn folder_path(&self) -> &Path {
        &self.folder_path
    }

    /// Session state derived at load time.
    #[must_use]
    pub fn session(&self) -> &SessionConfig {
        &self.session
    }
}
