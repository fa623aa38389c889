//! Service Error Types

use data_validator::ValidationError;
use storage::StorageError;
use thiserror::Error;

/// Errors returned by [`crate::AddressBook`] operations
#[derive(Debug, Error)]
pub enum AddressBookError {
    /// Payload rejected before any write
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Referenced address does not exist
    #[error("ID {0} : Does not exist")]
    NotFound(i64),

    /// Backend failure, passed through unchanged
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for AddressBookError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(id) => AddressBookError::NotFound(id),
            other => AddressBookError::Storage(other),
        }
    }
}
