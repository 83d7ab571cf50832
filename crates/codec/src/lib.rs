//! Serde binding for json-nullable
//!
//! This crate connects `JsonNullable` to serde_json:
//! - ReferenceCodec / NullableCodec: reference-type strategy and field helpers
//! - NullableModule / ModuleRegistry: configuration unit and explicit registration
//! - JsonMapper: serde_json front end applying the registered module
//! - NullableConfig: TOML configuration
//! - CodecError: error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod mapper;
pub mod module;
pub mod reference;

pub use config::{NullableConfig, CONFIG_FILE_NAME};
pub use error::{CodecError, CodecResult};
pub use mapper::JsonMapper;
pub use module::{ModuleRegistry, NullableModule, MODULE_NAME};
pub use reference::{NullableCodec, ReferenceCodec};
