//! Serde support for [`JsonNullable`]
//!
//! | JSON field | Deserialized as |
//! |------------|-----------------|
//! | missing (with `#[serde(default)]`) | `Undefined` |
//! | `null` | `Present(None)` |
//! | `"  "` into a `T` that rejects strings | `Undefined`, or `Present(None)` under `BlankStringPolicy::Null` |
//! | `"  "` into a `T` that accepts strings | `Present(Some(T))` |
//! | any other value | `Present(Some(T))` |
//!
//! Whether `T` accepts strings is decided by trying the blank token against
//! it, not by its declared type. Catch-all types such as `serde_json::Value`
//! accept any token and therefore keep `""` as a value.
//!
//! Writing mirrors `Option`: contents are written with `serialize_some`,
//! null and undefined with `serialize_none`. Whether an undefined field is
//! written at all is decided by [`skip_if_excluded`] on the field.
//!
//! Reading goes through a self-describing `serde_json::Value` first so that a
//! blank string can be tried against `T` and then reinterpreted. The crate
//! enables serde_json's `arbitrary_precision` so numbers keep their literal
//! text in that buffer; `u128`/`i128` contents beyond the 64-bit range
//! decode exactly.

use crate::context::{BlankStringPolicy, CodecContext};
use crate::nullable::JsonNullable;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use tracing::trace;

impl<T: Serialize> Serialize for JsonNullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonNullable::Present(Some(value)) => serializer.serialize_some(value),
            JsonNullable::Present(None) | JsonNullable::Undefined => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for JsonNullable<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_with_policy(deserializer, CodecContext::current().blank_strings)
    }
}

/// Deserialize a [`JsonNullable`] with an explicit blank-string policy.
///
/// Usable directly as `#[serde(deserialize_with = "...")]` through a thin
/// wrapper that fixes the policy.
pub fn deserialize_with_policy<'de, D, T>(
    deserializer: D,
    policy: BlankStringPolicy,
) -> Result<JsonNullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let json = JsonValue::deserialize(deserializer)?;
    from_json_value(json, policy).map_err(de::Error::custom)
}

/// Convert an already parsed JSON value into a [`JsonNullable`].
///
/// # Errors
///
/// Returns the `serde_json` error raised by `T` for non-blank input it
/// cannot represent.
pub fn from_json_value<T>(
    json: JsonValue,
    policy: BlankStringPolicy,
) -> Result<JsonNullable<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    match json {
        JsonValue::Null => Ok(JsonNullable::null()),
        JsonValue::String(text) if text.trim().is_empty() => {
            match T::deserialize(JsonValue::String(text)) {
                Ok(value) => Ok(JsonNullable::of_value(value)),
                Err(e) => {
                    trace!(
                        target: "json_nullable::de",
                        policy = ?policy,
                        error = %e,
                        "Blank string rejected by field type"
                    );
                    Ok(policy.resolve())
                }
            }
        }
        other => T::deserialize(other).map(JsonNullable::of_value),
    }
}

/// `skip_serializing_if` hook honouring the active [`Inclusion`](crate::Inclusion).
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct UserPatch {
///     #[serde(default, skip_serializing_if = "json_nullable_core::skip_if_excluded")]
///     nickname: JsonNullable<String>,
/// }
/// ```
pub fn skip_if_excluded<T>(value: &JsonNullable<T>) -> bool {
    !CodecContext::current().inclusion.includes(value)
}

/// Field helper that reads blank strings as explicit nulls.
///
/// For use with `#[serde(default, deserialize_with = "...")]` when a single
/// field needs "clear on blank" regardless of the active context.
pub fn blank_as_null<'de, D, T>(deserializer: D) -> Result<JsonNullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    deserialize_with_policy(deserializer, BlankStringPolicy::Null)
}
