//! Error types for the relay core.
//!
//! [`RelayError`] is the top-level error for adapter and pipeline operations.

use thiserror::Error;

/// Top-level error for the relay (source transport, destination gateway, IO).
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Source error: {0}")]
    Source(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
