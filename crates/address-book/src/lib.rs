//! Address Book Service
//!
//! The operations exposed to request handlers: list, get, create, replace,
//! delete, and find-within-radius. Input is validated before any write, and
//! proximity queries read through the repository without mutating it.

mod error;
mod proximity;
mod service;

pub use error::AddressBookError;
pub use proximity::{within_radius, Nearby};
pub use service::AddressBook;

pub use data_validator::{ValidationConfig, ValidationError, Validator};
pub use storage::{Address, AddressRepository, NewAddress, StorageError};
