//! Config Tests
//!
//! Mappers built from `json-nullable.toml`.

use crate::common::{init_tracing, PetPatch};
use json_nullable::codec::CONFIG_FILE_NAME;
use json_nullable::{Inclusion, JsonNullable, NullableConfig};
use tempfile::TempDir;

#[test]
fn default_file_gives_default_mapper() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    NullableConfig::write_default_if_missing(&path).unwrap();

    let mapper = NullableConfig::from_file(&path).unwrap().into_mapper();
    assert_eq!(mapper.registry().len(), 1);
    assert_eq!(mapper.inclusion(), Inclusion::NonAbsent);

    let patch: PetPatch = mapper.from_str(r#"{"age": ""}"#).unwrap();
    assert!(patch.age.is_undefined());
}

#[test]
fn configured_mapper_applies_both_policies() {
    init_tracing();
    let config = NullableConfig::from_toml_str(
        "map_blank_string_to_null = true\ninclusion = \"always\"\n",
    )
    .unwrap();
    let mapper = config.into_mapper();

    let patch: PetPatch = mapper.from_str(r#"{"age": ""}"#).unwrap();
    assert!(patch.age.is_null());

    let json = mapper
        .to_string(&PetPatch {
            name: JsonNullable::of_value("Rex".to_string()),
            ..PetPatch::default()
        })
        .unwrap();
    assert_eq!(json, r#"{"name":"Rex","age":null,"tags":null}"#);
}

#[test]
fn malformed_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "inclusion = 3").unwrap();

    let err = NullableConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}
