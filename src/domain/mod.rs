// Domain Layer - Container tags and mapping types

pub mod mapping;

// Re-exports
pub use mapping::{ContainerTag, ErasedMapping, MapValue, OrderedMap, SortedMap};
