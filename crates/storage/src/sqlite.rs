//! SQLite Repository
//!
//! Rows live in the `addressbook` table. The pool is handed in by the caller;
//! each operation checks a connection out for its own duration only.

use crate::{Address, AddressRepository, NewAddress, StorageError};
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::{debug, info};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS addressbook (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        address   TEXT    NOT NULL,
        latitude  REAL    NOT NULL,
        longitude REAL    NOT NULL
    )
"#;

const SELECT_COLUMNS: &str = "SELECT id, address, latitude, longitude FROM addressbook";

/// Repository backed by a SQLite connection pool
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Wrap an existing pool. The schema must already exist; see [`Self::migrate`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url` and make sure the schema exists.
    ///
    /// `sqlite::memory:` databases are per-connection, so the pool is pinned
    /// to a single long-lived connection in that case.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let in_memory = url.contains(":memory:");
        let options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = options.connect(url).await?;
        info!("Connected to SQLite at {}", url);

        let repo = Self::new(pool);
        repo.migrate().await?;
        Ok(repo)
    }

    /// Create the `addressbook` table if absent
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AddressRepository for SqliteRepository {
    async fn list(&self) -> Result<Vec<Address>, StorageError> {
        let rows = sqlx::query_as::<_, Address>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Address, StorageError> {
        sqlx::query_as::<_, Address>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound(id))
    }

    async fn create(&self, address: NewAddress) -> Result<Address, StorageError> {
        let result =
            sqlx::query("INSERT INTO addressbook (address, latitude, longitude) VALUES (?, ?, ?)")
                .bind(&address.label)
                .bind(address.latitude)
                .bind(address.longitude)
                .execute(&self.pool)
                .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted address with ID {}", id);
        Ok(address.into_address(id))
    }

    async fn replace(&self, id: i64, address: NewAddress) -> Result<Address, StorageError> {
        // An early return drops `tx`, which rolls back and releases the connection.
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM addressbook WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(StorageError::NotFound(id));
        }

        sqlx::query("UPDATE addressbook SET address = ?, latitude = ?, longitude = ? WHERE id = ?")
            .bind(&address.label)
            .bind(address.latitude)
            .bind(address.longitude)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!("Replaced address with ID {}", id);
        Ok(address.into_address(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM addressbook WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(StorageError::NotFound(id));
        }

        sqlx::query("DELETE FROM addressbook WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!("Deleted address with ID {}", id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM addressbook")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as usize)
    }
}
