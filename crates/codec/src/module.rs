//! Module object and explicit registration
//!
//! A [`NullableModule`] bundles the binding's configuration. Hosts register
//! it with a [`ModuleRegistry`]; registering an equal module twice is a no-op.
//!
//! ## Equality
//!
//! Modules have no identity beyond their configuration, so two modules are
//! equal when their name and blank-string flag match. A module configured
//! differently is a separate registration, and the most recent one wins.

use crate::reference::NullableCodec;
use json_nullable_core::{BlankStringPolicy, CodecContext, Inclusion};
use tracing::{debug, info};

/// Name every nullable module reports
pub const MODULE_NAME: &str = "JsonNullableModule";

/// Configuration unit for the serde binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullableModule {
    map_blank_string_to_null: bool,
}

impl NullableModule {
    /// Module with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Read blank strings in non-string fields as explicit null.
    ///
    /// A client sending `""` for a number usually wants to clear it;
    /// the default treats the token as if the field was not sent.
    pub fn map_blank_string_to_null(mut self, state: bool) -> Self {
        self.map_blank_string_to_null = state;
        self
    }

    /// Module name
    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    /// Whether blank strings map to null
    pub fn maps_blank_string_to_null(&self) -> bool {
        self.map_blank_string_to_null
    }

    /// Blank-string policy implied by this module
    pub fn blank_string_policy(&self) -> BlankStringPolicy {
        if self.map_blank_string_to_null {
            BlankStringPolicy::Null
        } else {
            BlankStringPolicy::Undefined
        }
    }

    /// Codec context for this module under `inclusion`
    pub fn context(&self, inclusion: Inclusion) -> CodecContext {
        CodecContext::new(self.blank_string_policy(), inclusion)
    }

    /// Codec for `JsonNullable<T>` fields under `inclusion`
    pub fn codec<T>(&self, inclusion: Inclusion) -> NullableCodec<T> {
        NullableCodec::new(self.blank_string_policy(), inclusion)
    }
}

/// Modules registered by the host, in registration order
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: Vec<NullableModule>,
}

impl ModuleRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module.
    ///
    /// Returns `false` if an equal module is already registered.
    pub fn register(&mut self, module: NullableModule) -> bool {
        if self.is_registered(&module) {
            debug!(
                target: "json_nullable::module",
                module = module.name(),
                blank_to_null = module.maps_blank_string_to_null(),
                "Module already registered, skipping"
            );
            return false;
        }
        info!(
            target: "json_nullable::module",
            module = module.name(),
            blank_to_null = module.maps_blank_string_to_null(),
            "Module registered"
        );
        self.modules.push(module);
        true
    }

    /// Check if an equal module is registered
    pub fn is_registered(&self, module: &NullableModule) -> bool {
        self.modules.contains(module)
    }

    /// The module in effect (the most recently registered)
    pub fn active(&self) -> Option<&NullableModule> {
        self.modules.last()
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
