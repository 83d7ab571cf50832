//! Validation Tests
//!
//! Constraints on PATCH bodies: fields left out are never checked, an
//! explicit null is.

use crate::common::{init_tracing, PetPatch};
use json_nullable::validation::{
    ExtractorRegistry, IsPresent, Max, MaxLen, NotNull, ValidationError, Validator,
};
use json_nullable::JsonMapper;

fn registry() -> ExtractorRegistry {
    let mut registry = ExtractorRegistry::with_nullable::<String>();
    registry.register_nullable::<u32>();
    registry
}

fn validator() -> Validator<PetPatch> {
    Validator::new()
        .extracted::<String, _, _, _>("name", |p: &PetPatch| &p.name, NotNull)
        .extracted::<String, _, _, _>("name", |p: &PetPatch| &p.name, MaxLen(8))
        .extracted::<u32, _, _, _>("age", |p: &PetPatch| &p.age, Max(30))
        .extracted::<String, _, _, _>("tags", |p: &PetPatch| &p.tags, MaxLen(5))
}

fn decode(json: &str) -> PetPatch {
    init_tracing();
    JsonMapper::new().from_str(json).unwrap()
}

#[test]
fn empty_patch_is_valid() {
    let violations = validator().validate(&decode("{}"), &registry()).unwrap();
    assert!(violations.is_empty());
}

#[test]
fn explicit_null_fails_not_null() {
    let violations = validator()
        .validate(&decode(r#"{"name": null}"#), &registry())
        .unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].to_string(), "name: must not be null");
}

#[test]
fn values_and_elements_are_checked() {
    let patch = decode(r#"{"name": "Bartholomew", "age": 31, "tags": ["ok", "too long"]}"#);
    let violations = validator().validate(&patch, &registry()).unwrap();
    let found: Vec<_> = violations
        .iter()
        .map(|v| (v.path.as_str(), v.constraint))
        .collect();
    assert_eq!(
        found,
        vec![("name", "MaxLen"), ("age", "Max"), ("tags[1]", "MaxLen")]
    );
}

#[test]
fn is_present_rejects_missing_field() {
    let validator = Validator::new().field("age", |p: &PetPatch| &p.age, IsPresent);
    let violations = validator.validate(&decode("{}"), &registry()).unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "age");
    assert_eq!(violations[0].message, "must be present");

    let violations = validator
        .validate(&decode(r#"{"age": null}"#), &registry())
        .unwrap();
    assert!(violations.is_empty());
}

#[test]
fn unregistered_extractor_is_error() {
    let result = validator().validate(&decode("{}"), &ExtractorRegistry::new());
    assert!(matches!(
        result,
        Err(ValidationError::MissingExtractor { .. })
    ));
}
