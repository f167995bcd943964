// mapinit - Map Constructor Registry
// Explicit registration table mapping container tags to map constructors

pub mod application;
pub mod domain;
pub mod error;
pub mod initializer;
pub mod port;

pub use application::ConstructorRegistry;
pub use domain::{ContainerTag, ErasedMapping, MapValue, OrderedMap, SortedMap};
pub use error::{InitError, Result};
pub use initializer::{OrderedMapInitializer, SortedMapInitializer};
pub use port::{ConstructError, MapConstructor};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
