//! Repository Contract

use crate::{Address, NewAddress, StorageError};
use async_trait::async_trait;

/// CRUD access to persisted addresses.
///
/// Implementations perform no validation; callers check payloads before
/// calling `create` or `replace`. `replace` and `delete` must confirm the id
/// exists before writing so a miss leaves the store untouched.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// All addresses in insertion (id) order
    async fn list(&self) -> Result<Vec<Address>, StorageError>;

    /// A single address, or `StorageError::NotFound`
    async fn get(&self, id: i64) -> Result<Address, StorageError>;

    /// Insert and return the address with its assigned id
    async fn create(&self, address: NewAddress) -> Result<Address, StorageError>;

    /// Overwrite every mutable field of an existing address
    async fn replace(&self, id: i64, address: NewAddress) -> Result<Address, StorageError>;

    /// Permanently remove an existing address
    async fn delete(&self, id: i64) -> Result<(), StorageError>;

    /// Number of stored addresses
    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.list().await?.len())
    }
}
