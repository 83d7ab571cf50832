//! Codec policies and the per-thread codec context
//!
//! Serde impls cannot take runtime arguments, so the policies that shape how
//! a [`JsonNullable`] is read and written travel through a thread-local
//! context. A mapper installs it for the duration of one call with
//! [`CodecContext::scope`]; outside a scope the defaults apply.

use crate::nullable::JsonNullable;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// How a blank string token is read into a field whose type rejects strings
///
/// A string-typed field always keeps the blank string as its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankStringPolicy {
    /// Treat the blank token as if the field had not been sent
    #[default]
    Undefined,
    /// Treat the blank token as an explicit null ("clear this field")
    Null,
}

impl BlankStringPolicy {
    /// The value a rejected blank token resolves to
    pub fn resolve<T>(self) -> JsonNullable<T> {
        match self {
            BlankStringPolicy::Undefined => JsonNullable::undefined(),
            BlankStringPolicy::Null => JsonNullable::null(),
        }
    }
}

/// Which field states are written when serializing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    /// Write every field; undefined is written as `null`
    Always,
    /// Omit undefined fields
    #[default]
    NonAbsent,
    /// Omit undefined and explicitly null fields
    NonNull,
}

impl Inclusion {
    /// Check if `value` is written under this policy
    pub fn includes<T>(self, value: &JsonNullable<T>) -> bool {
        match self {
            Inclusion::Always => true,
            Inclusion::NonAbsent => value.is_present(),
            Inclusion::NonNull => value.is_non_null(),
        }
    }
}

/// Policies active for the current serde call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodecContext {
    /// Blank-string handling for non-string fields
    pub blank_strings: BlankStringPolicy,
    /// Field inclusion when writing
    pub inclusion: Inclusion,
}

thread_local! {
    static ACTIVE_CONTEXT: Cell<Option<CodecContext>> = const { Cell::new(None) };
}

/// Restores the previous context when a scope ends, including on unwind
struct ScopeGuard {
    previous: Option<CodecContext>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE_CONTEXT.with(|active| active.set(self.previous));
    }
}

impl CodecContext {
    /// Create a context from both policies
    pub fn new(blank_strings: BlankStringPolicy, inclusion: Inclusion) -> Self {
        CodecContext {
            blank_strings,
            inclusion,
        }
    }

    /// The context installed on this thread, or the defaults
    pub fn current() -> Self {
        ACTIVE_CONTEXT
            .with(|active| active.get())
            .unwrap_or_default()
    }

    /// Run `f` with this context installed on the current thread.
    ///
    /// Scopes nest; the outer context is back in place when `f` returns.
    pub fn scope<R, F>(self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let previous = ACTIVE_CONTEXT.with(|active| active.replace(Some(self)));
        let _guard = ScopeGuard { previous };
        f()
    }
}
