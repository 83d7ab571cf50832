//! Binding configuration via `json-nullable.toml`
//!
//! The host can keep the module flags and the inclusion policy in a small
//! TOML file instead of wiring them in code. Missing keys take their
//! defaults, so an empty file is a valid config.

use crate::error::{CodecError, CodecResult};
use crate::mapper::JsonMapper;
use crate::module::NullableModule;
use json_nullable_core::Inclusion;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "json-nullable.toml";

/// Configuration for the serde binding.
///
/// # Example
///
/// ```toml
/// # Read "" in non-string fields as null instead of "not sent"
/// map_blank_string_to_null = false
///
/// # "always", "non_absent" (default) or "non_null"
/// inclusion = "non_absent"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NullableConfig {
    /// Read blank strings in non-string fields as explicit null
    #[serde(default)]
    pub map_blank_string_to_null: bool,
    /// Which field states are written
    #[serde(default)]
    pub inclusion: Inclusion,
}

impl NullableConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# json-nullable configuration
#
# Blank strings ("", "  ") sent for non-string fields:
#   false = treat as not sent (default)
#   true  = treat as an explicit null, clearing the field
map_blank_string_to_null = false

# Fields written when serializing:
#   "always"     = every field, undefined written as null
#   "non_absent" = skip undefined fields (default)
#   "non_null"   = skip undefined and null fields
inclusion = "non_absent"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Config` if the text is not a valid config.
    pub fn from_toml_str(content: &str) -> CodecResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> CodecResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| {
            CodecError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        info!(target: "json_nullable::config", path = ?path, "Loaded config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> CodecResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> CodecResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Module described by this config
    pub fn module(&self) -> NullableModule {
        NullableModule::new().map_blank_string_to_null(self.map_blank_string_to_null)
    }

    /// Mapper with this config's module registered
    pub fn into_mapper(self) -> JsonMapper {
        JsonMapper::new()
            .with_module(self.module())
            .with_inclusion(self.inclusion)
    }
}
