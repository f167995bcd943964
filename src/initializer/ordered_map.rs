// Ordered-Map Initializer
// Narrows a generic mapping to the insertion-ordered container

use crate::domain::{ContainerTag, ErasedMapping, OrderedMap};
use crate::port::{ConstructError, MapConstructor};
use tracing::warn;

/// Constructor for the insertion-ordered container
///
/// The mapping is assumed by contract to already be an `OrderedMap`;
/// `construct` narrows it and hands back the same allocation. Stateless, so
/// a single instance can serve any number of concurrent callers.
pub struct OrderedMapInitializer {
    tag: ContainerTag,
}

impl OrderedMapInitializer {
    /// Tag under which this constructor registers
    pub const TAG: &'static str = "ordered_map";

    pub fn new() -> Self {
        Self {
            tag: ContainerTag::new(Self::TAG),
        }
    }
}

impl Default for OrderedMapInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl MapConstructor for OrderedMapInitializer {
    fn tag(&self) -> &ContainerTag {
        &self.tag
    }

    fn construct(&self, mapping: ErasedMapping) -> Result<ErasedMapping, ConstructError> {
        match mapping.downcast::<OrderedMap>() {
            Ok(map) => {
                let narrowed: ErasedMapping = map;
                Ok(narrowed)
            }
            Err(_) => {
                warn!(
                    container = %self.tag,
                    "Mapping is not an instance of the target container"
                );
                Err(ConstructError::TypeMismatch {
                    expected: self.tag.clone(),
                })
            }
        }
    }
}
