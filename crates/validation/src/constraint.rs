//! Constraints checked against extracted values
//!
//! A constraint sees `None` for a null value. Constraints other than
//! [`NotNull`] accept null, so a cleared field only fails when the host asks
//! for it explicitly.

use json_nullable_core::JsonNullable;

/// A check applied to one value
pub trait Constraint<V: ?Sized>: Send + Sync {
    /// Short constraint name reported in violations
    fn name(&self) -> &'static str;

    /// Human-readable failure message
    fn message(&self) -> String;

    /// Check `value` (`None` for null)
    fn is_valid(&self, value: Option<&V>) -> bool;
}

/// Rejects null
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNull;

impl<V: ?Sized> Constraint<V> for NotNull {
    fn name(&self) -> &'static str {
        "NotNull"
    }

    fn message(&self) -> String {
        "must not be null".to_string()
    }

    fn is_valid(&self, value: Option<&V>) -> bool {
        value.is_some()
    }
}

/// Limits a string's length in characters
#[derive(Debug, Clone, Copy)]
pub struct MaxLen(pub usize);

impl<V> Constraint<V> for MaxLen
where
    V: AsRef<str> + ?Sized,
{
    fn name(&self) -> &'static str {
        "MaxLen"
    }

    fn message(&self) -> String {
        format!("size must be at most {}", self.0)
    }

    fn is_valid(&self, value: Option<&V>) -> bool {
        value.map_or(true, |s| s.as_ref().chars().count() <= self.0)
    }
}

/// Upper bound for an integer
#[derive(Debug, Clone, Copy)]
pub struct Max(pub i64);

impl<V> Constraint<V> for Max
where
    V: Copy + Into<i64>,
{
    fn name(&self) -> &'static str {
        "Max"
    }

    fn message(&self) -> String {
        format!("must be less than or equal to {}", self.0)
    }

    fn is_valid(&self, value: Option<&V>) -> bool {
        value.map_or(true, |v| (*v).into() <= self.0)
    }
}

/// Requires a nullable field to be sent (null counts as sent)
///
/// Checked against the field itself, not its extracted contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsPresent;

impl<T> Constraint<JsonNullable<T>> for IsPresent {
    fn name(&self) -> &'static str {
        "IsPresent"
    }

    fn message(&self) -> String {
        "must be present".to_string()
    }

    fn is_valid(&self, value: Option<&JsonNullable<T>>) -> bool {
        value.map_or(true, JsonNullable::is_present)
    }
}
