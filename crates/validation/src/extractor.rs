//! Value extractors for nullable containers
//!
//! A validator checks constraints on the values a container holds, not on
//! the container itself. An extractor walks a `JsonNullable` field and
//! reports each contained value to a [`ValueReceiver`]:
//!
//! | Field type                      | Undefined | Null          | Value                    |
//! |---------------------------------|-----------|---------------|--------------------------|
//! | `JsonNullable<T>`               | nothing   | `value(None)` | `value(Some(v))`         |
//! | `JsonNullable<Vec<T>>`          | nothing   | nothing       | `indexed_value` per item |
//! | `JsonNullable<HashSet<T>>` etc. | nothing   | nothing       | `iterable_value` per item|
//!
//! Reporting nothing for an undefined field is what keeps "not sent" fields
//! clear of every constraint, including not-null.

use json_nullable_core::JsonNullable;
use std::collections::{BTreeSet, HashSet};

/// Position of an extracted value relative to its field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathNode {
    /// The field's own contents
    Value,
    /// Element of an ordered collection
    Indexed(usize),
    /// Element of an unordered collection
    Iterable,
}

impl PathNode {
    /// Render the path of this node below `field`
    pub fn render(&self, field: &str) -> String {
        match self {
            PathNode::Value => field.to_string(),
            PathNode::Indexed(index) => format!("{}[{}]", field, index),
            PathNode::Iterable => format!("{}[]", field),
        }
    }
}

/// Sink for values reported by an extractor
pub trait ValueReceiver<'a, V> {
    /// The container's own contents (`None` for null)
    fn value(&mut self, value: Option<&'a V>);

    /// An element of an ordered collection
    fn indexed_value(&mut self, index: usize, value: Option<&'a V>);

    /// An element of an unordered collection
    fn iterable_value(&mut self, value: Option<&'a V>);
}

/// Reports the values held by a container of type `C`
pub trait ValueExtractor<C>: Send + Sync {
    /// Type of the reported values
    type Item;

    /// Walk `container` and report its values to `receiver`
    fn extract_values<'a>(&self, container: &'a C, receiver: &mut dyn ValueReceiver<'a, Self::Item>);
}

/// Extractor for a plain `JsonNullable<T>`
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableExtractor;

impl<T> ValueExtractor<JsonNullable<T>> for NullableExtractor {
    type Item = T;

    fn extract_values<'a>(
        &self,
        container: &'a JsonNullable<T>,
        receiver: &mut dyn ValueReceiver<'a, T>,
    ) {
        if let JsonNullable::Present(contents) = container {
            receiver.value(contents.as_ref());
        }
    }
}

/// Extractor for a `JsonNullable<Vec<T>>`, element by element
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableListExtractor;

impl<T> ValueExtractor<JsonNullable<Vec<T>>> for NullableListExtractor {
    type Item = T;

    fn extract_values<'a>(
        &self,
        container: &'a JsonNullable<Vec<T>>,
        receiver: &mut dyn ValueReceiver<'a, T>,
    ) {
        if let JsonNullable::Present(Some(items)) = container {
            for (index, item) in items.iter().enumerate() {
                receiver.indexed_value(index, Some(item));
            }
        }
    }
}

/// Extractor for a nullable set, element by element
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableSetExtractor;

impl<T, S> ValueExtractor<JsonNullable<HashSet<T, S>>> for NullableSetExtractor {
    type Item = T;

    fn extract_values<'a>(
        &self,
        container: &'a JsonNullable<HashSet<T, S>>,
        receiver: &mut dyn ValueReceiver<'a, T>,
    ) {
        if let JsonNullable::Present(Some(items)) = container {
            for item in items {
                receiver.iterable_value(Some(item));
            }
        }
    }
}

impl<T> ValueExtractor<JsonNullable<BTreeSet<T>>> for NullableSetExtractor {
    type Item = T;

    fn extract_values<'a>(
        &self,
        container: &'a JsonNullable<BTreeSet<T>>,
        receiver: &mut dyn ValueReceiver<'a, T>,
    ) {
        if let JsonNullable::Present(Some(items)) = container {
            for item in items {
                receiver.iterable_value(Some(item));
            }
        }
    }
}

/// Receiver that records every reported value with its position
#[derive(Debug)]
pub struct CollectingReceiver<'a, V> {
    values: Vec<(PathNode, Option<&'a V>)>,
}

impl<'a, V> CollectingReceiver<'a, V> {
    /// Empty receiver
    pub fn new() -> Self {
        CollectingReceiver { values: Vec::new() }
    }

    /// Recorded values in report order
    pub fn into_values(self) -> Vec<(PathNode, Option<&'a V>)> {
        self.values
    }
}

impl<V> Default for CollectingReceiver<'_, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> ValueReceiver<'a, V> for CollectingReceiver<'a, V> {
    fn value(&mut self, value: Option<&'a V>) {
        self.values.push((PathNode::Value, value));
    }

    fn indexed_value(&mut self, index: usize, value: Option<&'a V>) {
        self.values.push((PathNode::Indexed(index), value));
    }

    fn iterable_value(&mut self, value: Option<&'a V>) {
        self.values.push((PathNode::Iterable, value));
    }
}
