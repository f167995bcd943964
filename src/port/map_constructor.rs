// Map Constructor Port
// Abstraction for narrowing a generic mapping to a concrete container

use crate::domain::{ContainerTag, ErasedMapping};
use thiserror::Error;

/// Construction errors
#[derive(Error, Debug)]
pub enum ConstructError {
    #[error("Type mismatch: mapping is not an instance of container '{expected}'")]
    TypeMismatch { expected: ContainerTag },
}

/// Map Constructor trait
///
/// Implementations:
/// - OrderedMapInitializer: insertion-ordered container
/// - SortedMapInitializer: key-ordered container
pub trait MapConstructor: Send + Sync {
    /// Tag of the container this constructor produces
    fn tag(&self) -> &ContainerTag;

    /// Narrow an already-constructed mapping to the target container
    ///
    /// Identity operation: the returned mapping is the same allocation, with
    /// the same key order and the same key-value pairs. No copy, no mutation.
    ///
    /// # Errors
    /// - ConstructError::TypeMismatch if the mapping is not an instance of
    ///   the target container
    fn construct(&self, mapping: ErasedMapping) -> Result<ErasedMapping, ConstructError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;
    /// Mock constructor behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Hand the mapping back untouched
        PassThrough,
        /// Always report a type mismatch
        Mismatch,
    }
    /// Mock Map Constructor for testing
    pub struct MockMapConstructor {
        tag: ContainerTag,
        behavior: MockBehavior,
        call_count: Mutex<usize>,
    }
    impl MockMapConstructor {
        pub fn new(tag: impl Into<String>, behavior: MockBehavior) -> Self {
            Self {
                tag: ContainerTag::new(tag),
                behavior,
                call_count: Mutex::new(0),
            }
        }
        pub fn new_pass_through(tag: impl Into<String>) -> Self {
            Self::new(tag, MockBehavior::PassThrough)
        }
        pub fn new_mismatch(tag: impl Into<String>) -> Self {
            Self::new(tag, MockBehavior::Mismatch)
        }
        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }
    impl MapConstructor for MockMapConstructor {
        fn tag(&self) -> &ContainerTag {
            &self.tag
        }
        fn construct(&self, mapping: ErasedMapping) -> Result<ErasedMapping, ConstructError> {
            *self.call_count.lock().unwrap() += 1;

            match &self.behavior {
                MockBehavior::PassThrough => Ok(mapping),
                MockBehavior::Mismatch => Err(ConstructError::TypeMismatch {
                    expected: self.tag.clone(),
                }),
            }
        }
    }
}
