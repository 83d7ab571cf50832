//! Reference-type codec
//!
//! A data-binding layer sees a [`JsonNullable`] as a reference type: a
//! wrapper that may or may not hold contents. [`ReferenceCodec`] is the
//! contract such a layer needs, and [`NullableCodec`] implements it together
//! with the serde plumbing for hand-written `Serialize` impls and
//! `DeserializeSeed` based decoding.

use crate::error::CodecResult;
use json_nullable_core::{
    deserialize_with_policy, BlankStringPolicy, Inclusion, JsonNullable, NullableResult,
};
use serde::de::{DeserializeOwned, DeserializeSeed};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// How a binding layer reads and rebuilds a reference type
pub trait ReferenceCodec {
    /// The wrapper type
    type Reference;
    /// The type it refers to
    type Contents;

    /// Check if the wrapper holds contents (null counts as held)
    fn is_value_present(&self, reference: &Self::Reference) -> bool;

    /// Borrow the contents for traversal.
    ///
    /// # Errors
    ///
    /// Fails when the wrapper holds nothing.
    fn get_referenced<'r>(
        &self,
        reference: &'r Self::Reference,
    ) -> NullableResult<Option<&'r Self::Contents>>;

    /// Wrap freshly decoded contents
    fn reference_value(&self, contents: Option<Self::Contents>) -> Self::Reference;

    /// Build the wrapper that replaces `reference` after an update
    fn update_reference(
        &self,
        reference: Self::Reference,
        contents: Option<Self::Contents>,
    ) -> Self::Reference;
}

/// Codec for `JsonNullable<T>` carrying a blank-string and an inclusion policy
pub struct NullableCodec<T> {
    blank_strings: BlankStringPolicy,
    inclusion: Inclusion,
    _contents: PhantomData<fn() -> T>,
}

impl<T> NullableCodec<T> {
    /// Create a codec with explicit policies
    pub fn new(blank_strings: BlankStringPolicy, inclusion: Inclusion) -> Self {
        NullableCodec {
            blank_strings,
            inclusion,
            _contents: PhantomData,
        }
    }

    /// Blank-string policy used when decoding
    pub fn blank_strings(&self) -> BlankStringPolicy {
        self.blank_strings
    }

    /// Inclusion policy used when encoding
    pub fn inclusion(&self) -> Inclusion {
        self.inclusion
    }

    /// Check if `value` is written under this codec's inclusion policy
    pub fn include(&self, value: &JsonNullable<T>) -> bool {
        self.inclusion.includes(value)
    }

    /// Merge a PATCH value into the current one.
    ///
    /// An undefined patch keeps `current`; anything present replaces it.
    pub fn apply_patch(&self, current: JsonNullable<T>, patch: JsonNullable<T>) -> JsonNullable<T> {
        match patch.into_inner() {
            Ok(contents) => self.update_reference(current, contents),
            Err(_) => current,
        }
    }

    /// Write a struct field, or skip it if the inclusion policy excludes it.
    pub fn serialize_field<S>(
        &self,
        state: &mut S,
        key: &'static str,
        value: &JsonNullable<T>,
    ) -> Result<(), S::Error>
    where
        S: SerializeStruct,
        T: Serialize,
    {
        if self.include(value) {
            state.serialize_field(key, value)
        } else {
            state.skip_field(key)
        }
    }

    /// Write a map entry, or leave it out if the inclusion policy excludes it.
    pub fn serialize_entry<M, K>(
        &self,
        map: &mut M,
        key: &K,
        value: &JsonNullable<T>,
    ) -> Result<(), M::Error>
    where
        M: SerializeMap,
        K: Serialize + ?Sized,
        T: Serialize,
    {
        if self.include(value) {
            map.serialize_entry(key, value)
        } else {
            Ok(())
        }
    }

    /// Decode with this codec's blank-string policy.
    pub fn decode<'de, D>(&self, deserializer: D) -> Result<JsonNullable<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        deserialize_with_policy(deserializer, self.blank_strings)
    }

    /// Decode from a JSON string with this codec's blank-string policy.
    pub fn decode_str(&self, json: &str) -> CodecResult<JsonNullable<T>>
    where
        T: DeserializeOwned,
    {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let value = self.decode(&mut deserializer)?;
        deserializer.end()?;
        Ok(value)
    }
}

impl<T> ReferenceCodec for NullableCodec<T> {
    type Reference = JsonNullable<T>;
    type Contents = T;

    fn is_value_present(&self, reference: &JsonNullable<T>) -> bool {
        reference.is_present()
    }

    fn get_referenced<'r>(&self, reference: &'r JsonNullable<T>) -> NullableResult<Option<&'r T>> {
        reference.get()
    }

    fn reference_value(&self, contents: Option<T>) -> JsonNullable<T> {
        JsonNullable::of(contents)
    }

    fn update_reference(&self, _reference: JsonNullable<T>, contents: Option<T>) -> JsonNullable<T> {
        // the wrapper is immutable, an update always builds a new one
        self.reference_value(contents)
    }
}

impl<'de, T> DeserializeSeed<'de> for NullableCodec<T>
where
    T: DeserializeOwned,
{
    type Value = JsonNullable<T>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.decode(deserializer)
    }
}

impl<T> Default for NullableCodec<T> {
    fn default() -> Self {
        NullableCodec::new(BlankStringPolicy::default(), Inclusion::default())
    }
}

impl<T> Clone for NullableCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NullableCodec<T> {}

impl<T> fmt::Debug for NullableCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullableCodec")
            .field("blank_strings", &self.blank_strings)
            .field("inclusion", &self.inclusion)
            .finish()
    }
}
