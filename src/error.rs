// Central Error Type for the Crate

use crate::domain::ContainerTag;
use crate::port::ConstructError;
use thiserror::Error;

/// Crate-level error type
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Construct error: {0}")]
    Construct(#[from] ConstructError),

    #[error("No constructor registered for container '{0}'")]
    NotRegistered(ContainerTag),

    #[error("Constructor already registered for container '{0}'")]
    DuplicateRegistration(ContainerTag),
}

/// Result type alias using InitError
pub type Result<T> = std::result::Result<T, InitError>;
