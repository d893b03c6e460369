//! Error types for the desk-sprite core.
//!
//! This module provides a unified error type for all operations in the
//! desk-sprite-core library: desktop layout loading, configuration
//! validation, and host window setup.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for desk-sprite-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read the desktop layout file from disk.
    #[error("failed to read desktop layout '{path}': {source}")]
    LayoutRead {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the desktop layout JSON content.
    #[error("failed to parse desktop layout JSON from '{path}': {source}")]
    LayoutParse {
        /// The path containing invalid JSON.
        path: PathBuf,
        /// The underlying JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the desktop layout file to disk.
    #[error("failed to write desktop layout '{path}': {source}")]
    LayoutWrite {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The host window refused an overlay mode request.
    #[error("window overlay setup failed: {message}")]
    Window {
        /// Description of what the host window rejected.
        message: String,
    },

    /// An error that doesn't fit other categories.
    #[error("{message}")]
    Other {
        /// Description of the error.
        message: String,
    },
}

impl Error {
    /// Create a new `ConfigError` with the given message.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new `Window` error with the given message.
    pub fn window(message: impl Into<String>) -> Self {
        Self::Window {
            message: message.into(),
        }
    }

    /// Create a new `Other` error with the given message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// A specialized `Result` type for desk-sprite-core operations.
pub type Result<T> = std::result::Result<T, Error>;
