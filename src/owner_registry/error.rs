use thiserror::Error;

use crate::domain::OwnerId;

/// Errors that can occur during owner operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OwnerError {
    #[error("Owner cannot be added as it already exists.")]
    AlreadyExists,
    #[error("Owner {0} does not exist.")]
    NotFound(OwnerId),
}
