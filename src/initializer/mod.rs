// Initializer Layer - Concrete map constructors

pub mod ordered_map;
pub mod sorted_map;

// Re-exports
pub use ordered_map::OrderedMapInitializer;
pub use sorted_map::SortedMapInitializer;
