//! Extractor registry
//!
//! The host registers the extractors it needs explicitly; nothing is
//! discovered at runtime. Extractors are keyed by container type and item
//! type, so the same container can expose different items through
//! different extractors.

use crate::extractor::{
    NullableExtractor, NullableListExtractor, NullableSetExtractor, ValueExtractor,
};
use json_nullable_core::JsonNullable;
use std::any::{type_name, Any, TypeId};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Shared handle to a registered extractor
pub type SharedExtractor<C, I> = Arc<dyn ValueExtractor<C, Item = I>>;

/// Extractors by (container, item) type
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ExtractorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the extractors for `JsonNullable<T>`, `JsonNullable<Vec<T>>`
    /// and nullable sets of `T`
    pub fn with_nullable<T: 'static>() -> Self {
        let mut registry = Self::new();
        registry.register_nullable::<T>();
        registry.register::<JsonNullable<Vec<T>>, _>(NullableListExtractor);
        registry.register::<JsonNullable<HashSet<T>>, _>(NullableSetExtractor);
        registry.register::<JsonNullable<BTreeSet<T>>, _>(NullableSetExtractor);
        registry
    }

    /// Register `extractor` for container type `C`.
    ///
    /// Returns `false` and keeps the existing entry if an extractor for the
    /// same container and item type is already registered.
    pub fn register<C, E>(&mut self, extractor: E) -> bool
    where
        C: 'static,
        E: ValueExtractor<C> + 'static,
        E::Item: 'static,
    {
        let key = TypeId::of::<(C, E::Item)>();
        if self.extractors.contains_key(&key) {
            debug!(
                target: "json_nullable::validation",
                container = type_name::<C>(),
                "Extractor already registered, skipping"
            );
            return false;
        }
        let shared: SharedExtractor<C, E::Item> = Arc::new(extractor);
        self.extractors.insert(key, Box::new(shared));
        debug!(
            target: "json_nullable::validation",
            container = type_name::<C>(),
            item = type_name::<E::Item>(),
            "Extractor registered"
        );
        true
    }

    /// Register the extractor for `JsonNullable<T>`
    pub fn register_nullable<T: 'static>(&mut self) -> bool {
        self.register::<JsonNullable<T>, _>(NullableExtractor)
    }

    /// Extractor for container `C` yielding items of type `I`
    pub fn get<C: 'static, I: 'static>(&self) -> Option<SharedExtractor<C, I>> {
        self.extractors
            .get(&TypeId::of::<(C, I)>())
            .and_then(|entry| entry.downcast_ref::<SharedExtractor<C, I>>())
            .cloned()
    }

    /// Check if an extractor for container `C` yielding `I` is registered
    pub fn contains<C: 'static, I: 'static>(&self) -> bool {
        self.extractors.contains_key(&TypeId::of::<(C, I)>())
    }

    /// Number of registered extractors
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &self.extractors.len())
            .finish()
    }
}
