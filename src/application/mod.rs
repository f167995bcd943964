// Application Layer - Registration table and dispatch

pub mod registry;


// Re-exports
pub use registry::ConstructorRegistry;
