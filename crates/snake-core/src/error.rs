// File: crates/snake-core/src/error.rs
// Summary: Error taxonomy for the geometry layer and its configuration boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("degenerate domain: min == max ({min})")]
    DegenerateDomain { min: f64, max: f64 },

    #[error("non-finite point at index {index}: ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    #[error("invalid configuration `{field}`: {message}")]
    InvalidConfig { field: &'static str, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig { field, message: message.into() }
    }
}
