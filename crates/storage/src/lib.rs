//! Storage Layer
//!
//! Owns the persisted address collection. Two backends implement the
//! [`AddressRepository`] contract: SQLite (via `sqlx`) and an in-memory store.

mod memory;
mod model;
mod repository;
mod sqlite;

pub use memory::MemoryRepository;
pub use model::{Address, NewAddress};
pub use repository::AddressRepository;
pub use sqlite::SqliteRepository;

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Address {0} not found")]
    NotFound(i64),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}
