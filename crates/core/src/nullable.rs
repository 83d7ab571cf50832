//! Three-state value wrapper
//!
//! This module defines:
//! - JsonNullable: a field that is undefined, explicitly null, or set
//! - Iter / IntoIter: zero-or-one element views over the contents
//!
//! ## States
//!
//! | State | Representation | Meaning in a PATCH body |
//! |-------|----------------|-------------------------|
//! | Undefined | `Undefined` | field not sent, leave unchanged |
//! | Null-present | `Present(None)` | field sent as `null`, clear it |
//! | Value-present | `Present(Some(v))` | field sent with a value, set it |
//!
//! ### Rules
//!
//! - Undefined never exposes contents: `get()` returns `NullableError::Undefined`
//! - Undefined propagates through every combinator unless stated otherwise
//! - No method mutates in place; transformations return new values
//! - Callbacks see the contents as `Option<_>`, so present-null is observable

use crate::error::{NullableError, NullableResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

/// Hash contribution of the missing contents of null and undefined values
const NULL_HASH_SENTINEL: u32 = 0;

/// A value that distinguishes "not sent", "sent as null" and "sent with a value"
///
/// An ordinary `Option<T>` field collapses the first two states. For partial
/// updates the difference matters: an absent field leaves the stored value
/// alone, an explicit null clears it.
///
/// ## Invariants
///
/// - `Undefined` carries no contents
/// - Values compare structurally; [`eq_contents`](Self::eq_contents) compares
///   across contents types, so `undefined()` equals `undefined()` for any `T`
/// - `Default` is `Undefined`, so `#[serde(default)]` maps a missing field to it
#[derive(Debug, Clone, Copy)]
pub enum JsonNullable<T> {
    /// The field was not present
    Undefined,
    /// The field was present; `None` is an explicit null
    Present(Option<T>),
}

impl<T> JsonNullable<T> {
    /// The not-present value.
    #[inline]
    pub const fn undefined() -> Self {
        JsonNullable::Undefined
    }

    /// Wrap possibly-null contents as present.
    ///
    /// `of(None)` is an explicit null, never undefined.
    #[inline]
    pub const fn of(value: Option<T>) -> Self {
        JsonNullable::Present(value)
    }

    /// Present with a concrete value
    #[inline]
    pub const fn of_value(value: T) -> Self {
        JsonNullable::Present(Some(value))
    }

    /// Present and explicitly null
    #[inline]
    pub const fn null() -> Self {
        JsonNullable::Present(None)
    }

    /// Wrap contents where a missing value means "not sent".
    ///
    /// `None` becomes `Undefined` instead of an explicit null. Used when the
    /// source cannot tell the two apart and absence is the safer reading.
    pub fn of_missable(value: Option<T>) -> Self {
        match value {
            Some(v) => JsonNullable::Present(Some(v)),
            None => JsonNullable::Undefined,
        }
    }

    /// Check if the field was present (null or not)
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, JsonNullable::Present(_))
    }

    /// Check if the field was not present
    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, JsonNullable::Undefined)
    }

    /// Check if the field was present with an explicit null
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonNullable::Present(None))
    }

    /// Check if the field was present with a value
    #[inline]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, JsonNullable::Present(Some(_)))
    }

    /// Borrow the contents.
    ///
    /// # Errors
    ///
    /// Returns `NullableError::Undefined` if the field was not present.
    pub fn get(&self) -> NullableResult<Option<&T>> {
        match self {
            JsonNullable::Present(contents) => Ok(contents.as_ref()),
            JsonNullable::Undefined => Err(NullableError::Undefined),
        }
    }

    /// Consume and return the contents.
    ///
    /// # Errors
    ///
    /// Returns `NullableError::Undefined` if the field was not present.
    pub fn into_inner(self) -> NullableResult<Option<T>> {
        match self {
            JsonNullable::Present(contents) => Ok(contents),
            JsonNullable::Undefined => Err(NullableError::Undefined),
        }
    }

    /// Contents if present (even when null), `other` otherwise
    pub fn or_else(self, other: Option<T>) -> Option<T> {
        match self {
            JsonNullable::Present(contents) => contents,
            JsonNullable::Undefined => other,
        }
    }

    /// Contents if present, otherwise the result of `supplier`.
    ///
    /// `supplier` only runs for undefined values.
    pub fn or_else_get<F>(self, supplier: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            JsonNullable::Present(contents) => contents,
            JsonNullable::Undefined => supplier(),
        }
    }

    /// Same as [`into_inner`](Self::into_inner)
    pub fn or_else_throw(self) -> NullableResult<Option<T>> {
        self.into_inner()
    }

    /// Contents if present, otherwise the error built by `error_supplier`.
    ///
    /// The supplied error is returned as is.
    pub fn or_else_throw_with<E, F>(self, error_supplier: F) -> Result<Option<T>, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            JsonNullable::Present(contents) => Ok(contents),
            JsonNullable::Undefined => Err(error_supplier()),
        }
    }

    /// Borrow as `JsonNullable<&T>`
    pub fn as_ref(&self) -> JsonNullable<&T> {
        match self {
            JsonNullable::Present(contents) => JsonNullable::Present(contents.as_ref()),
            JsonNullable::Undefined => JsonNullable::Undefined,
        }
    }

    /// Transform the contents of a present value.
    ///
    /// `f` receives `None` for an explicit null and may itself return
    /// `None`, which yields a present null. Undefined stays undefined.
    pub fn map<U, F>(self, f: F) -> JsonNullable<U>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        match self {
            JsonNullable::Present(contents) => JsonNullable::Present(f(contents)),
            JsonNullable::Undefined => JsonNullable::Undefined,
        }
    }

    /// Replace a present value with the wrapper returned by `f`.
    ///
    /// This is the one combinator that can turn a present null into
    /// `Undefined`, e.g. when walking a chain of optional fields.
    pub fn flat_map<U, F>(self, f: F) -> JsonNullable<U>
    where
        F: FnOnce(Option<T>) -> JsonNullable<U>,
    {
        match self {
            JsonNullable::Present(contents) => f(contents),
            JsonNullable::Undefined => JsonNullable::Undefined,
        }
    }

    /// Keep a present value only if `predicate` holds.
    ///
    /// Anything rejected, and anything undefined, becomes `Undefined`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(Option<&T>) -> bool,
    {
        match self {
            JsonNullable::Present(contents) => {
                if predicate(contents.as_ref()) {
                    JsonNullable::Present(contents)
                } else {
                    JsonNullable::Undefined
                }
            }
            JsonNullable::Undefined => JsonNullable::Undefined,
        }
    }

    /// Self if present, otherwise the wrapper produced by `supplier`
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> JsonNullable<T>,
    {
        match self {
            JsonNullable::Present(_) => self,
            JsonNullable::Undefined => supplier(),
        }
    }

    /// Run `action` for a present value, including an explicit null.
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(Option<&T>),
    {
        if let JsonNullable::Present(contents) = self {
            action(contents.as_ref());
        }
    }

    /// Run `action` for a present value, `undefined_action` otherwise.
    ///
    /// Exactly one of the two callbacks runs.
    pub fn if_present_or_else<F, G>(&self, action: F, undefined_action: G)
    where
        F: FnOnce(Option<&T>),
        G: FnOnce(),
    {
        match self {
            JsonNullable::Present(contents) => action(contents.as_ref()),
            JsonNullable::Undefined => undefined_action(),
        }
    }

    /// Run `action` only for a present, non-null value.
    pub fn if_not_null<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let JsonNullable::Present(Some(value)) = self {
            action(value);
        }
    }

    /// Zero items when undefined, exactly one (possibly `None`) when present.
    ///
    /// Every call returns an independent iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: match self {
                JsonNullable::Present(contents) => Some(contents.as_ref()),
                JsonNullable::Undefined => None,
            },
        }
    }

    /// Apply this value as a partial update to `current`.
    ///
    /// Undefined leaves `current` untouched; a present value replaces it,
    /// so an explicit null clears it.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            JsonNullable::Present(contents) => contents,
            JsonNullable::Undefined => current,
        }
    }

    /// Compare with a wrapper of another contents type.
    ///
    /// Same rules as `==`: states must match and values compare with
    /// `T: PartialEq<U>`, so `undefined()` equals `undefined()` for any pair
    /// of types.
    pub fn eq_contents<U>(&self, other: &JsonNullable<U>) -> bool
    where
        T: PartialEq<U>,
    {
        match (self, other) {
            (JsonNullable::Undefined, JsonNullable::Undefined) => true,
            (JsonNullable::Present(None), JsonNullable::Present(None)) => true,
            (JsonNullable::Present(Some(a)), JsonNullable::Present(Some(b))) => a == b,
            _ => false,
        }
    }

    /// Convert into the `Option<Option<T>>` encoding
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            JsonNullable::Present(contents) => Some(contents),
            JsonNullable::Undefined => None,
        }
    }
}

impl<T> Default for JsonNullable<T> {
    fn default() -> Self {
        JsonNullable::Undefined
    }
}

impl<T: PartialEq> PartialEq for JsonNullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_contents(other)
    }
}

impl<T: Eq> Eq for JsonNullable<T> {}

impl<T: Hash> Hash for JsonNullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            JsonNullable::Present(Some(value)) => value.hash(state),
            _ => NULL_HASH_SENTINEL.hash(state),
        }
        self.is_present().hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for JsonNullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonNullable::Present(Some(value)) => write!(f, "JsonNullable[{}]", value),
            JsonNullable::Present(None) => f.write_str("JsonNullable[null]"),
            JsonNullable::Undefined => f.write_str("JsonNullable.undefined"),
        }
    }
}

impl<T> From<Option<Option<T>>> for JsonNullable<T> {
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            Some(contents) => JsonNullable::Present(contents),
            None => JsonNullable::Undefined,
        }
    }
}

impl<T> From<JsonNullable<T>> for Option<Option<T>> {
    fn from(value: JsonNullable<T>) -> Self {
        value.into_option()
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Borrowing iterator returned by [`JsonNullable::iter`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<Option<&'a T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the contents of a [`JsonNullable`]
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for JsonNullable<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a JsonNullable<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
