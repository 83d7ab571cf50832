//! Validation binding for json-nullable
//!
//! Constraints declared on a `JsonNullable` field apply to the value it
//! holds. An undefined field is never checked, so a PATCH body that leaves
//! a field out passes even a not-null constraint; an explicit null is
//! checked like any other value.
//!
//! - extractor: unwraps nullable fields and collections into values
//! - registry: explicit extractor registration
//! - constraint: checks applied to extracted values
//! - validator: rule builder producing violations with property paths

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constraint;
pub mod error;
pub mod extractor;
pub mod registry;
pub mod validator;

pub use constraint::{Constraint, IsPresent, Max, MaxLen, NotNull};
pub use error::{ValidationError, ValidationResult};
pub use extractor::{
    CollectingReceiver, NullableExtractor, NullableListExtractor, NullableSetExtractor, PathNode,
    ValueExtractor, ValueReceiver,
};
pub use registry::{ExtractorRegistry, SharedExtractor};
pub use validator::{Validator, Violation};
