//! Value Semantics Tests
//!
//! Absence and explicit null stay distinct through every accessor and
//! combinator.

use json_nullable::{JsonNullable, NullableError};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;

// ============================================================================
// Construction and access
// ============================================================================

#[test]
fn undefined_is_not_present() {
    let value: JsonNullable<i32> = JsonNullable::undefined();
    assert!(!value.is_present());
    assert_eq!(value.get(), Err(NullableError::Undefined));
}

#[test]
fn of_null_is_present() {
    let value: JsonNullable<i32> = JsonNullable::of(None);
    assert!(value.is_present());
    assert_eq!(value.get(), Ok(None));
    assert_eq!(value, JsonNullable::<i32>::null());
}

#[test]
fn fields_compare_against_plain_constructors() {
    let patch: crate::common::PetPatch = serde_json::from_str(r#"{"name": null}"#).unwrap();
    assert_eq!(patch.name, JsonNullable::null());
    assert_eq!(patch.age, JsonNullable::undefined());
    assert_ne!(patch.tags, JsonNullable::null());
}

#[test]
fn contents_compare_across_types() {
    let owned = JsonNullable::of_value("x".to_string());
    assert!(owned.eq_contents(&JsonNullable::of_value("x")));
    assert!(JsonNullable::<String>::undefined().eq_contents(&JsonNullable::<u8>::undefined()));
}

#[test]
fn map_appends() {
    let value = JsonNullable::of_value("x".to_string()).map(|s| s.map(|s| s + "y"));
    assert_eq!(value.get(), Ok(Some(&"xy".to_string())));
}

#[test]
fn or_else_keeps_null_apart_from_absent() {
    assert_eq!(JsonNullable::<&str>::undefined().or_else(Some("z")), Some("z"));
    assert_eq!(JsonNullable::<&str>::null().or_else(Some("z")), None);
}

#[test]
fn if_present_or_else_runs_action_for_null() {
    let action_value = Cell::new(Some(Some(0)));
    let fallback_ran = Cell::new(false);

    JsonNullable::<i32>::null().if_present_or_else(
        |v| action_value.set(Some(v.copied())),
        || fallback_ran.set(true),
    );

    assert_eq!(action_value.get(), Some(None));
    assert!(!fallback_ran.get());
}

#[test]
fn or_else_throw_with_returns_user_error() {
    #[derive(Debug, PartialEq)]
    struct Missing(&'static str);

    let result = JsonNullable::<i32>::undefined().or_else_throw_with(|| Missing("age"));
    assert_eq!(result, Err(Missing("age")));
}

#[test]
fn filter_false_drops_present_null() {
    let value = JsonNullable::<i32>::null().filter(|_| false);
    assert!(value.is_undefined());
}

#[test]
fn iteration_is_repeatable() {
    let value = JsonNullable::<i32>::null();
    assert_eq!(value.iter().collect::<Vec<_>>(), vec![None]);
    assert_eq!(value.iter().count(), 1);
    assert_eq!(JsonNullable::<i32>::undefined().iter().count(), 0);
}

#[test]
fn string_forms() {
    assert_eq!(JsonNullable::of_value(5).to_string(), "JsonNullable[5]");
    assert_eq!(JsonNullable::<i32>::null().to_string(), "JsonNullable[null]");
    assert_eq!(JsonNullable::<i32>::undefined().to_string(), "JsonNullable.undefined");
}

#[test]
fn equal_values_hash_alike() {
    let mut set = HashSet::new();
    set.insert(JsonNullable::of_value(1));
    set.insert(JsonNullable::of_value(1));
    set.insert(JsonNullable::null());
    set.insert(JsonNullable::undefined());
    assert_eq!(set.len(), 3);
}

// ============================================================================
// Combinator laws
// ============================================================================

fn nullable() -> impl Strategy<Value = JsonNullable<i32>> {
    any::<Option<Option<i32>>>().prop_map(JsonNullable::from)
}

proptest! {
    #[test]
    fn map_identity(x in nullable()) {
        prop_assert_eq!(x.map(|v| v), x);
    }

    #[test]
    fn map_then_flat_map(x in nullable()) {
        let f = |v: Option<i32>| v.map(|n| n.wrapping_mul(3));
        let g = |v: Option<i32>| match v {
            Some(n) if n % 2 == 0 => JsonNullable::undefined(),
            other => JsonNullable::of(other),
        };
        prop_assert_eq!(x.map(f).flat_map(g), x.flat_map(|v| g(f(v))));
    }

    #[test]
    fn present_iterates_once(x in nullable()) {
        let expected = usize::from(x.is_present());
        prop_assert_eq!(x.iter().count(), expected);
        prop_assert_eq!(x.into_iter().count(), expected);
    }
}
