//! Error types for the validation binding

use thiserror::Error;

/// Result type alias for validation runs
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Failures of the validator itself, as opposed to constraint violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A rule needs an extractor the host never registered
    #[error("No value extractor registered for {container} -> {item}")]
    MissingExtractor {
        /// Container type name
        container: &'static str,
        /// Extracted item type name
        item: &'static str,
    },
}
