//! Inclusion Policy Tests
//!
//! Which field states a mapper writes under each `Inclusion`.

use crate::common::{init_tracing, PetPatch};
use json_nullable::{CodecContext, Inclusion, JsonMapper, JsonNullable};
use serde_json::json;

fn patch() -> PetPatch {
    PetPatch {
        name: JsonNullable::null(),
        age: JsonNullable::of_value(3),
        tags: JsonNullable::undefined(),
    }
}

fn written(inclusion: Inclusion) -> serde_json::Value {
    init_tracing();
    JsonMapper::new()
        .with_inclusion(inclusion)
        .to_value(&patch())
        .unwrap()
}

#[test]
fn always_writes_undefined_as_null() {
    assert_eq!(
        written(Inclusion::Always),
        json!({"name": null, "age": 3, "tags": null})
    );
}

#[test]
fn non_absent_skips_undefined() {
    assert_eq!(written(Inclusion::NonAbsent), json!({"name": null, "age": 3}));
}

#[test]
fn non_null_skips_undefined_and_null() {
    assert_eq!(written(Inclusion::NonNull), json!({"age": 3}));
}

#[test]
fn default_is_non_absent() {
    init_tracing();
    let json = JsonMapper::new().to_value(&patch()).unwrap();
    assert_eq!(json, written(Inclusion::NonAbsent));
}

#[test]
fn context_is_restored_after_call() {
    init_tracing();
    let _ = JsonMapper::new()
        .with_inclusion(Inclusion::NonNull)
        .to_string(&patch())
        .unwrap();
    assert_eq!(CodecContext::current(), CodecContext::default());
}

#[test]
fn plain_serde_json_uses_defaults() {
    let json = serde_json::to_value(patch()).unwrap();
    assert_eq!(json, json!({"name": null, "age": 3}));
}

#[test]
fn scoped_context_applies_to_plain_serde_json() {
    let ctx = CodecContext::new(Default::default(), Inclusion::Always);
    let json = ctx.scope(|| serde_json::to_value(patch())).unwrap();
    assert_eq!(json, json!({"name": null, "age": 3, "tags": null}));
}
