//! JSON mapper applying the registered module to whole documents
//!
//! Derived `Serialize`/`Deserialize` impls cannot be parameterized, so the
//! mapper installs a [`CodecContext`] on the calling thread for the duration
//! of each call. Fields declared as
//!
//! ```ignore
//! #[serde(default, skip_serializing_if = "json_nullable_core::skip_if_excluded")]
//! field: JsonNullable<T>,
//! ```
//!
//! then follow the mapper's inclusion policy and the module's blank-string
//! policy.

use crate::error::CodecResult;
use crate::module::{ModuleRegistry, NullableModule};
use crate::reference::NullableCodec;
use json_nullable_core::{BlankStringPolicy, CodecContext, Inclusion};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::trace;

/// serde_json front end with nullable-aware policies
#[derive(Debug, Clone, Default)]
pub struct JsonMapper {
    registry: ModuleRegistry,
    inclusion: Inclusion,
}

impl JsonMapper {
    /// Mapper with no module and the default inclusion
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `module` and return the mapper
    pub fn with_module(mut self, module: NullableModule) -> Self {
        self.registry.register(module);
        self
    }

    /// Set the inclusion policy and return the mapper
    pub fn with_inclusion(mut self, inclusion: Inclusion) -> Self {
        self.inclusion = inclusion;
        self
    }

    /// Register `module`; `false` if an equal module was already registered
    pub fn register_module(&mut self, module: NullableModule) -> bool {
        self.registry.register(module)
    }

    /// Registered modules
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Inclusion policy used when writing
    pub fn inclusion(&self) -> Inclusion {
        self.inclusion
    }

    /// Context installed around every call
    pub fn context(&self) -> CodecContext {
        let blank_strings = self
            .registry
            .active()
            .map(NullableModule::blank_string_policy)
            .unwrap_or(BlankStringPolicy::Undefined);
        CodecContext::new(blank_strings, self.inclusion)
    }

    /// Codec for hand-written impls, matching this mapper's policies
    pub fn codec<T>(&self) -> NullableCodec<T> {
        let ctx = self.context();
        NullableCodec::new(ctx.blank_strings, ctx.inclusion)
    }

    /// Serialize `value` to a JSON string
    pub fn to_string<V>(&self, value: &V) -> CodecResult<String>
    where
        V: Serialize + ?Sized,
    {
        let ctx = self.context();
        trace!(target: "json_nullable::mapper", inclusion = ?ctx.inclusion, "Serializing");
        Ok(ctx.scope(|| serde_json::to_string(value))?)
    }

    /// Serialize `value` to a pretty-printed JSON string
    pub fn to_string_pretty<V>(&self, value: &V) -> CodecResult<String>
    where
        V: Serialize + ?Sized,
    {
        Ok(self.context().scope(|| serde_json::to_string_pretty(value))?)
    }

    /// Serialize `value` to a JSON value tree
    pub fn to_value<V>(&self, value: &V) -> CodecResult<JsonValue>
    where
        V: Serialize + ?Sized,
    {
        Ok(self.context().scope(|| serde_json::to_value(value))?)
    }

    /// Deserialize a JSON string
    pub fn from_str<V>(&self, json: &str) -> CodecResult<V>
    where
        V: DeserializeOwned,
    {
        let ctx = self.context();
        trace!(target: "json_nullable::mapper", blank_strings = ?ctx.blank_strings, "Deserializing");
        Ok(ctx.scope(|| serde_json::from_str(json))?)
    }

    /// Deserialize a JSON value tree
    pub fn from_value<V>(&self, json: JsonValue) -> CodecResult<V>
    where
        V: DeserializeOwned,
    {
        Ok(self.context().scope(|| serde_json::from_value(json))?)
    }
}
