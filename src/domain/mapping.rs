// Mapping Domain Model

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;

/// Tag identifying a target container in the registration table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerTag(String);

impl ContainerTag {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContainerTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value element type produced by the surrounding JSON deserialization
pub type MapValue = serde_json::Value;

/// Key-value container preserving insertion order during iteration
pub type OrderedMap = indexmap::IndexMap<String, MapValue>;

/// Key-value container iterating in key order
pub type SortedMap = BTreeMap<String, MapValue>;

/// Type-erased, already-constructed mapping handed over by the caller
///
/// Constructors narrow this to their concrete container; they never build a
/// new mapping from it.
pub type ErasedMapping = Box<dyn Any + Send>;
