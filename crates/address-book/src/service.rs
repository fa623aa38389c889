//! Address Book Operations

use crate::error::AddressBookError;
use crate::proximity::{within_radius, Nearby};
use data_validator::Validator;
use metrics::{counter, histogram};
use std::sync::Arc;
use storage::{Address, AddressRepository, NewAddress};
use tracing::{debug, info, warn};

/// Validated CRUD and proximity queries over an [`AddressRepository`]
#[derive(Clone)]
pub struct AddressBook {
    repository: Arc<dyn AddressRepository>,
    validator: Validator,
}

impl AddressBook {
    /// Create a service over `repository` with default validation bounds
    pub fn new(repository: Arc<dyn AddressRepository>) -> Self {
        Self::with_validator(repository, Validator::default())
    }

    pub fn with_validator(repository: Arc<dyn AddressRepository>, validator: Validator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Backing repository
    pub fn repository(&self) -> &Arc<dyn AddressRepository> {
        &self.repository
    }

    /// All addresses in storage order
    pub async fn list_addresses(&self) -> Result<Vec<Address>, AddressBookError> {
        Ok(self.repository.list().await?)
    }

    /// A single address by id
    pub async fn get_address(&self, id: i64) -> Result<Address, AddressBookError> {
        Ok(self.repository.get(id).await?)
    }

    /// Validate and insert a new address
    pub async fn create_address(
        &self,
        label: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Address, AddressBookError> {
        let coordinate = self
            .validator
            .validate_address(label, latitude, longitude)
            .inspect_err(|e| warn!("Rejected create: {}", e))?;

        let address = self
            .repository
            .create(NewAddress::new(label, coordinate))
            .await?;

        counter!("addressbook_addresses_created_total").increment(1);
        info!(id = address.id, label = %address.label, "Address created");
        Ok(address)
    }

    /// Validate and overwrite every field of an existing address
    pub async fn replace_address(
        &self,
        id: i64,
        label: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Address, AddressBookError> {
        let coordinate = self
            .validator
            .validate_address(label, latitude, longitude)
            .inspect_err(|e| warn!(id, "Rejected replace: {}", e))?;

        let address = self
            .repository
            .replace(id, NewAddress::new(label, coordinate))
            .await?;

        info!(id, "Address replaced");
        Ok(address)
    }

    /// Remove an existing address
    pub async fn delete_address(&self, id: i64) -> Result<(), AddressBookError> {
        self.repository.delete(id).await?;

        counter!("addressbook_addresses_deleted_total").increment(1);
        info!(id, "Address deleted");
        Ok(())
    }

    /// Addresses within `radius_km` of the target, excluding the target
    pub async fn find_within_radius(
        &self,
        target_id: i64,
        radius_km: f64,
    ) -> Result<Vec<Address>, AddressBookError> {
        Ok(self
            .find_within_radius_with_distance(target_id, radius_km)
            .await?
            .into_iter()
            .map(|n| n.address)
            .collect())
    }

    /// Like [`Self::find_within_radius`], keeping each match's distance.
    ///
    /// A negative or non-finite radius is rejected before storage is read.
    /// A missing target fails before any distance is computed.
    pub async fn find_within_radius_with_distance(
        &self,
        target_id: i64,
        radius_km: f64,
    ) -> Result<Vec<Nearby>, AddressBookError> {
        self.validator.validate_radius(radius_km)?;

        let target = self.repository.get(target_id).await?;
        let candidates = self.repository.list().await?;
        let scanned = candidates.len();

        let found = within_radius(&target, candidates, radius_km);

        counter!("addressbook_proximity_queries_total").increment(1);
        histogram!("addressbook_proximity_candidates").record(scanned as f64);
        debug!(
            target_id,
            radius_km,
            scanned,
            matched = found.len(),
            "Proximity query"
        );
        Ok(found)
    }
}
