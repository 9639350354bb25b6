//! Local key/value storage for tubemark.
//!
//! The popup persists bookmarks through the [`LocalStore`] trait: a
//! synchronous string key/value interface matching what the browser's
//! extension storage offers. [`SqliteStore`] is the shipped implementation,
//! backed by the `local_store` table.

use std::sync::Arc;

use rusqlite::params;

use crate::database::connection::Database;
use crate::types::errors::StorageError;

/// Trait defining the synchronous key/value storage interface.
///
/// Keys and values are plain strings. `keys` enumerates every key in the
/// store — callers that share the store with other data filter by their own
/// namespace prefix.
pub trait LocalStore {
    fn keys(&self) -> Result<Vec<String>, StorageError>;
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Key/value store backed by the SQLite `local_store` table.
pub struct SqliteStore {
    db: Arc<Database>,
}

impl SqliteStore {
    /// Creates a new `SqliteStore` over the given database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl LocalStore for SqliteStore {
    /// Enumerates every key in the store, in unspecified order.
    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare("SELECT key FROM local_store")
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row.map_err(|e| StorageError::ReadFailed(e.to_string()))?);
        }
        Ok(keys)
    }

    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.db.connection();
        match conn.query_row(
            "SELECT value FROM local_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        ) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(e.to_string())),
        }
    }

    /// Writes `value` under `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO local_store (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    /// Removes the entry under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.db
            .connection()
            .execute("DELETE FROM local_store WHERE key = ?1", params![key])
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}
