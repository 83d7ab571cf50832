//! json-nullable - three-state JSON values
//!
//! A JSON field can be absent, explicitly `null`, or hold a value. PATCH
//! style APIs need all three: absent leaves the stored value alone, `null`
//! clears it, a value replaces it. [`JsonNullable`] models exactly that.
//!
//! # Quick Start
//!
//! ```ignore
//! use json_nullable::{skip_if_excluded, JsonMapper, JsonNullable, NullableModule};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct PetPatch {
//!     #[serde(default, skip_serializing_if = "skip_if_excluded")]
//!     name: JsonNullable<String>,
//!     #[serde(default, skip_serializing_if = "skip_if_excluded")]
//!     age: JsonNullable<u32>,
//! }
//!
//! let mapper = JsonMapper::new().with_module(NullableModule::new());
//! let patch: PetPatch = mapper.from_str(r#"{"name": null}"#)?;
//! assert!(patch.name.is_null());
//! assert!(patch.age.is_undefined());
//! ```
//!
//! # Layout
//!
//! - [`JsonNullable`] and its codec context live in `json-nullable-core`
//! - the serde_json mapper, module and config live in [`codec`]
//! - constraint checking for nullable fields lives in [`validation`]

pub use json_nullable_core::*;

pub use json_nullable_codec as codec;
pub use json_nullable_codec::{CodecError, CodecResult, JsonMapper, NullableConfig, NullableModule};

pub use json_nullable_validation as validation;
