//! In-Memory Repository

use crate::{Address, AddressRepository, NewAddress, StorageError};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

struct Inner {
    /// Addresses in insertion order
    addresses: Vec<Address>,
    /// Next id to hand out; never reused after delete
    next_id: i64,
}

/// Repository kept entirely in process memory
pub struct MemoryRepository {
    inner: Mutex<Inner>,
}

impl MemoryRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        info!("Creating in-memory address repository");
        Self {
            inner: Mutex::new(Inner {
                addresses: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StorageError> {
        self.inner
            .lock()
            .map_err(|e| StorageError::DatabaseError(format!("Lock error: {}", e)))
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressRepository for MemoryRepository {
    async fn list(&self) -> Result<Vec<Address>, StorageError> {
        Ok(self.lock()?.addresses.clone())
    }

    async fn get(&self, id: i64) -> Result<Address, StorageError> {
        self.lock()?
            .addresses
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn create(&self, address: NewAddress) -> Result<Address, StorageError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let address = address.into_address(id);
        inner.addresses.push(address.clone());
        debug!("Inserted address with ID {}", id);
        Ok(address)
    }

    async fn replace(&self, id: i64, address: NewAddress) -> Result<Address, StorageError> {
        let mut inner = self.lock()?;
        let slot = inner
            .addresses
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StorageError::NotFound(id))?;

        *slot = address.into_address(id);
        debug!("Replaced address with ID {}", id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        let index = inner
            .addresses
            .iter()
            .position(|a| a.id == id)
            .ok_or(StorageError::NotFound(id))?;

        inner.addresses.remove(index);
        debug!("Deleted address with ID {}", id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.addresses.len())
    }
}
