//! Core types for json-nullable
//!
//! This crate defines the three-state field wrapper and its serde support:
//! - JsonNullable: undefined / explicit null / value
//! - NullableError: failure to read an undefined value
//! - BlankStringPolicy, Inclusion, CodecContext: policies applied by serde
//! - wire: Serialize/Deserialize impls and field helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod nullable;
pub mod wire;

pub use context::{BlankStringPolicy, CodecContext, Inclusion};
pub use error::{NullableError, NullableResult};
pub use nullable::{IntoIter, Iter, JsonNullable};
pub use wire::{blank_as_null, deserialize_with_policy, from_json_value, skip_if_excluded};
