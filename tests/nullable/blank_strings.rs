//! Blank String Tests
//!
//! A blank string sent for a non-string field reads as "not sent" by
//! default and as an explicit null when the module maps blanks to null.

use crate::common::{init_tracing, sample_pet, PetPatch};
use json_nullable::{blank_as_null, JsonMapper, JsonNullable, NullableModule};
use serde::Deserialize;

fn mapper(map_blank_string_to_null: bool) -> JsonMapper {
    init_tracing();
    JsonMapper::new()
        .with_module(NullableModule::new().map_blank_string_to_null(map_blank_string_to_null))
}

#[test]
fn blank_is_undefined_by_default() {
    let patch: PetPatch = mapper(false).from_str(r#"{"age": ""}"#).unwrap();
    assert!(patch.age.is_undefined());
    assert_eq!(patch.apply(sample_pet()).age, Some(4));
}

#[test]
fn blank_is_null_when_mapped() {
    let patch: PetPatch = mapper(true).from_str(r#"{"age": "   "}"#).unwrap();
    assert!(patch.age.is_null());
    assert_eq!(patch.apply(sample_pet()).age, None);
}

#[test]
fn string_fields_keep_blank_value() {
    for flag in [false, true] {
        let patch: PetPatch = mapper(flag).from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(patch.name, JsonNullable::of_value(String::new()));
    }
}

#[test]
fn blank_list_follows_policy() {
    let patch: PetPatch = mapper(true).from_str(r#"{"tags": ""}"#).unwrap();
    assert!(patch.tags.is_null());
}

#[test]
fn non_blank_string_for_number_is_error() {
    let result: json_nullable::CodecResult<PetPatch> = mapper(true).from_str(r#"{"age": "x"}"#);
    assert!(result.is_err());
}

#[test]
fn last_registered_module_wins() {
    init_tracing();
    let mapper = JsonMapper::new()
        .with_module(NullableModule::new())
        .with_module(NullableModule::new().map_blank_string_to_null(true));
    let patch: PetPatch = mapper.from_str(r#"{"age": ""}"#).unwrap();
    assert!(patch.age.is_null());
}

#[derive(Debug, Deserialize)]
struct Clearing {
    #[serde(default, deserialize_with = "blank_as_null")]
    limit: JsonNullable<u64>,
}

#[test]
fn field_helper_ignores_context() {
    let value: Clearing = serde_json::from_str(r#"{"limit": ""}"#).unwrap();
    assert!(value.limit.is_null());

    let value: Clearing = serde_json::from_str("{}").unwrap();
    assert!(value.limit.is_undefined());
}
