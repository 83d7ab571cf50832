//! Error types for the serde binding

use json_nullable_core::NullableError;
use std::io;
use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Errors raised while encoding, decoding or configuring
#[derive(Debug, Error)]
pub enum CodecError {
    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be parsed or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading or writing a config file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Contents were read from an undefined value
    #[error(transparent)]
    Nullable(#[from] NullableError),
}

impl From<toml::de::Error> for CodecError {
    fn from(e: toml::de::Error) -> Self {
        CodecError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CodecError {
    fn from(e: toml::ser::Error) -> Self {
        CodecError::Config(e.to_string())
    }
}
