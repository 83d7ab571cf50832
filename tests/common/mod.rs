//! Shared fixtures for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use json_nullable::{skip_if_excluded, JsonNullable};
use serde::{Deserialize, Serialize};
use std::sync::Once;

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once per process. Filter with `RUST_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Stored record a PATCH applies to
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pet {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub tags: Option<Vec<String>>,
}

/// PATCH body for [`Pet`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PetPatch {
    #[serde(default, skip_serializing_if = "skip_if_excluded")]
    pub name: JsonNullable<String>,
    #[serde(default, skip_serializing_if = "skip_if_excluded")]
    pub age: JsonNullable<u32>,
    #[serde(default, skip_serializing_if = "skip_if_excluded")]
    pub tags: JsonNullable<Vec<String>>,
}

impl PetPatch {
    /// Apply this patch to `pet`
    pub fn apply(self, pet: Pet) -> Pet {
        Pet {
            name: self.name.apply_to(pet.name),
            age: self.age.apply_to(pet.age),
            tags: self.tags.apply_to(pet.tags),
        }
    }
}

/// A pet with every field set
pub fn sample_pet() -> Pet {
    Pet {
        name: Some("Rex".to_string()),
        age: Some(4),
        tags: Some(vec!["good".to_string()]),
    }
}
