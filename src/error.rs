//! Error types for the coverage engine.

use thiserror::Error;

/// Engine error type.
///
/// Only programmer-level contract violations and environment I/O failures
/// appear here. Missing hardware capabilities and denied permissions are
/// ordinary return values on the sensing port, never errors.
#[derive(Error, Debug)]
pub enum KshetraError {
    /// A polygon was constructed with fewer than 3 vertices.
    #[error("invalid boundary: need at least 3 vertices, got {0}")]
    InvalidBoundary(usize),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for KshetraError {
    fn from(e: toml::de::Error) -> Self {
        KshetraError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KshetraError>;
