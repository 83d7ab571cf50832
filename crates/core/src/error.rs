//! Error types for the nullable core
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for nullable accessors
pub type NullableResult<T> = std::result::Result<T, NullableError>;

/// Errors raised when reading a [`JsonNullable`](crate::JsonNullable)
///
/// Callbacks and suppliers are plain closures, so the "null argument"
/// failures of a dynamically typed binding cannot occur here. The only
/// runtime failure is reading contents that were never sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NullableError {
    /// Contents were requested from an undefined value
    #[error("Value is undefined")]
    Undefined,
}
