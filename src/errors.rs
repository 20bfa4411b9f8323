//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! Two error families exist and never mix:
//!
//! - [`BindError`] travels through binding-facade completion callbacks and
//!   is always recoverable.
//! - [`EngineError`] covers engine startup and configuration failures and
//!   is returned from fallible APIs as [`Result<T>`].

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported through a lookup completion callback.
///
/// The `Display` strings are the exact messages the scripting side has
/// always received. Downstream code matches on them; do not reword.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    /// The name is absent from the registry, or the entity behind the
    /// weak reference has already been destroyed.
    #[error("Return value is nullptr!")]
    NotFound,

    /// An entity exists under the name but is not of the requested kind.
    #[error("Dynamic cast failed!")]
    WrongKind,
}

/// The main error type for engine lifecycle and configuration.
#[derive(Error, Debug)]
pub enum EngineError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A configuration file exists but could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// The file that failed to load
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A configuration file exists but does not parse.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, EngineError>`.
pub type Result<T> = std::result::Result<T, EngineError>;
