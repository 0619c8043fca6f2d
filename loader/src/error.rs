//! Error types for catalog loading.
//!
//! Covers every load-time failure: I/O, JSON and YAML parsing, a missing
//! catalog file, and a catalog that parses but fails validation.

use std::path::PathBuf;

use command_line_commands_core::CatalogError;
use thiserror::Error;

/// Errors that can occur while loading a catalog or configuration.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The catalog file does not exist.
    #[error("catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The catalog parsed but is structurally invalid.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    /// Every configured source failed to load.
    #[error("no catalog sources available")]
    NoSourcesAvailable,
}

/// Convenience alias for results with [`LoaderError`].
pub type Result<T> = std::result::Result<T, LoaderError>;
