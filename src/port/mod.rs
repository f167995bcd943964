// Port Layer - Interfaces for map construction

pub mod map_constructor;

// Re-exports
pub use map_constructor::{ConstructError, MapConstructor};
