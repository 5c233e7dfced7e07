use thiserror::Error;

use crate::domain::{OwnerId, PropertyId};

/// Errors that can occur during property operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PropertyError {
    #[error("Property cannot be added. Owner with ID {0} does not exist.")]
    OwnerNotFound(OwnerId),
    #[error("Property with ID: {0} not found, please try again!")]
    NotFound(PropertyId),
}
