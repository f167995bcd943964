// Sorted-Map Initializer
// Narrows a generic mapping to the key-ordered container

use crate::domain::{ContainerTag, ErasedMapping, SortedMap};
use crate::port::{ConstructError, MapConstructor};
use tracing::warn;

/// Constructor for the key-ordered container
pub struct SortedMapInitializer {
    tag: ContainerTag,
}

impl SortedMapInitializer {
    /// Tag under which this constructor registers
    pub const TAG: &'static str = "sorted_map";

    pub fn new() -> Self {
        Self {
            tag: ContainerTag::new(Self::TAG),
        }
    }
}

impl Default for SortedMapInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl MapConstructor for SortedMapInitializer {
    fn tag(&self) -> &ContainerTag {
        &self.tag
    }

    fn construct(&self, mapping: ErasedMapping) -> Result<ErasedMapping, ConstructError> {
        match mapping.downcast::<SortedMap>() {
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
