// Constructor Registry
// Explicit registration table: container tag -> map constructor

use crate::domain::{ContainerTag, ErasedMapping};
use crate::error::{InitError, Result};
use crate::initializer::{OrderedMapInitializer, SortedMapInitializer};
use crate::port::{ConstructError, MapConstructor};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registration table mapping container tags to constructors
///
/// Populated explicitly at startup, then shared immutably (`Arc<Self>`).
/// `register` takes `&mut self`, so the populate-then-share lifecycle is
/// enforced by the type system; dispatch itself is read-only.
#[derive(Default)]
pub struct ConstructorRegistry {
    table: HashMap<ContainerTag, Arc<dyn MapConstructor>>,
}

impl ConstructorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Registry pre-populated with the built-in constructors
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        // Built-in tags are distinct, so plain inserts cannot conflict
        registry.insert(Arc::new(OrderedMapInitializer::new()));
        registry.insert(Arc::new(SortedMapInitializer::new()));
        registry
    }

    fn insert(&mut self, constructor: Arc<dyn MapConstructor>) {
        let tag = constructor.tag().clone();
        debug!(container = %tag, "Registered map constructor");
        self.table.insert(tag, constructor);
    }

    /// Register a constructor under its own tag
    ///
    /// # Errors
    /// - InitError::DuplicateRegistration if the tag is already taken
    pub fn register(&mut self, constructor: Arc<dyn MapConstructor>) -> Result<()> {
        if self.table.contains_key(constructor.tag()) {
            return Err(InitError::DuplicateRegistration(constructor.tag().clone()));
        }
        self.insert(constructor);
        Ok(())
    }

    /// Look up the constructor for a container tag
    ///
    /// # Errors
    /// - InitError::NotRegistered if no constructor carries the tag
    pub fn resolve(&self, tag: &ContainerTag) -> Result<Arc<dyn MapConstructor>> {
        self.table
            .get(tag)
            .cloned()
            .ok_or_else(|| InitError::NotRegistered(tag.clone()))
    }

    /// Resolve and dispatch in one call
    pub fn construct(&self, tag: &ContainerTag, mapping: ErasedMapping) -> Result<ErasedMapping> {
        let constructor = self.resolve(tag)?;
        let narrowed = constructor.construct(mapping)?;
        Ok(narrowed)
    }

    /// Dispatch and narrow the result to the caller's container type
    ///
    /// # Errors
    /// - InitError::NotRegistered if the tag has no constructor
    /// - InitError::Construct if the mapping or the requested type does not
    ///   match the registered container
    pub fn construct_as<T: Any>(&self, tag: &ContainerTag, mapping: ErasedMapping) -> Result<Box<T>> {
        let narrowed = self.construct(tag, mapping)?;
        narrowed.downcast::<T>().map_err(|_| {
            InitError::Construct(ConstructError::TypeMismatch {
                expected: tag.clone(),
            })
        })
    }

    /// Whether a constructor is registered for the tag
    pub fn is_registered(&self, tag: &ContainerTag) -> bool {
        self.table.contains_key(tag)
    }

    /// Number of registered constructors
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
