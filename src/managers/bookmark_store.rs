//! Bookmark Store for tubemark.
//!
//! Implements `BookmarkStoreTrait` — CRUD operations for timestamped video
//! bookmarks, persisted as JSON records in the local key/value store.

use uuid::Uuid;

use crate::database::local_store::LocalStore;
use crate::types::bookmark::BookmarkRecord;
use crate::types::errors::BookmarkError;

/// Fixed key prefix distinguishing bookmark entries from any other data
/// sharing the key/value store.
pub const BOOKMARK_KEY_PREFIX: &str = "yt-bookmark-";

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// Enumerates every persisted bookmark. Fresh snapshot, order unspecified.
    fn list_all(&self) -> Result<Vec<BookmarkRecord>, BookmarkError>;
    /// Persists a new bookmark and returns the generated ID.
    fn create(
        &mut self,
        title: &str,
        url: &str,
        timestamp_seconds: u64,
    ) -> Result<String, BookmarkError>;
    /// Loads a single bookmark by ID.
    fn get(&self, id: &str) -> Result<Option<BookmarkRecord>, BookmarkError>;
    /// Overwrites the bookmark at `id` in place.
    fn update(
        &mut self,
        id: &str,
        title: &str,
        url: &str,
        timestamp_seconds: u64,
    ) -> Result<(), BookmarkError>;
    /// Removes the bookmark at `id`.
    fn delete(&mut self, id: &str) -> Result<(), BookmarkError>;
    /// Number of persisted bookmarks.
    fn count(&self) -> Result<usize, BookmarkError>;
}

/// Bookmark store backed by an injected key/value store.
pub struct BookmarkStore<S: LocalStore> {
    store: S,
}

impl<S: LocalStore> BookmarkStore<S> {
    /// Creates a new `BookmarkStore` over the provided key/value backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Storage key for a bookmark ID.
    fn key_for(id: &str) -> String {
        format!("{}{}", BOOKMARK_KEY_PREFIX, id)
    }

    /// Keys of every persisted bookmark entry.
    fn bookmark_keys(&self) -> Result<Vec<String>, BookmarkError> {
        let keys = self
            .store
            .keys()
            .map_err(|e| BookmarkError::Storage(e.to_string()))?;
        Ok(keys
            .into_iter()
            .filter(|k| k.starts_with(BOOKMARK_KEY_PREFIX))
            .collect())
    }

    /// Rejects empty title or URL before a write.
    fn validate(title: &str, url: &str) -> Result<(), BookmarkError> {
        if title.is_empty() {
            return Err(BookmarkError::Validation("title must not be empty".to_string()));
        }
        if url.is_empty() {
            return Err(BookmarkError::Validation("url must not be empty".to_string()));
        }
        Ok(())
    }

    fn decode(key: &str, value: &str) -> Result<BookmarkRecord, BookmarkError> {
        serde_json::from_str(value)
            .map_err(|e| BookmarkError::Serialization(format!("{}: {}", key, e)))
    }

    fn encode(record: &BookmarkRecord) -> Result<String, BookmarkError> {
        serde_json::to_string(record)
            .map_err(|e| BookmarkError::Serialization(e.to_string()))
    }
}

impl<S: LocalStore> BookmarkStoreTrait for BookmarkStore<S> {
    /// Enumerates every persisted bookmark.
    ///
    /// Produces a fresh snapshot on each call — not a live view. Order is
    /// whatever the backend enumerates, which callers must not rely on.
    fn list_all(&self) -> Result<Vec<BookmarkRecord>, BookmarkError> {
        let mut records = Vec::new();
        for key in self.bookmark_keys()? {
            let value = self
                .store
                .get(&key)
                .map_err(|e| BookmarkError::Storage(e.to_string()))?;
            // A key can vanish between enumeration and load; skip it.
            if let Some(value) = value {
                records.push(Self::decode(&key, &value)?);
            }
        }
        Ok(records)
    }

    /// Persists a new bookmark. Returns the generated ID.
    ///
    /// Fails with `Validation` if title or url is empty; nothing is written
    /// on failure.
    fn create(
        &mut self,
        title: &str,
        url: &str,
        timestamp_seconds: u64,
    ) -> Result<String, BookmarkError> {
        Self::validate(title, url)?;

        let id = Uuid::new_v4().to_string();
        let record = BookmarkRecord {
            id: id.clone(),
            title: title.to_string(),
            url: url.to_string(),
            timestamp_seconds,
        };

        let value = Self::encode(&record)?;
        self.store
            .set(&Self::key_for(&id), &value)
            .map_err(|e| BookmarkError::Storage(e.to_string()))?;

        Ok(id)
    }

    /// Loads the bookmark stored under `id`, or `None` if absent.
    fn get(&self, id: &str) -> Result<Option<BookmarkRecord>, BookmarkError> {
        let key = Self::key_for(id);
        let value = self
            .store
            .get(&key)
            .map_err(|e| BookmarkError::Storage(e.to_string()))?;
        match value {
            Some(value) => Ok(Some(Self::decode(&key, &value)?)),
            None => Ok(None),
        }
    }

    /// Overwrites the bookmark at `id` with the given fields.
    ///
    /// Last-write-wins, no merge. Fails with `NotFound` if `id` does not
    /// exist — updating never resurrects a deleted bookmark.
    fn update(
        &mut self,
        id: &str,
        title: &str,
        url: &str,
        timestamp_seconds: u64,
    ) -> Result<(), BookmarkError> {
        Self::validate(title, url)?;

        let key = Self::key_for(id);
        let existing = self
            .store
            .get(&key)
            .map_err(|e| BookmarkError::Storage(e.to_string()))?;
        if existing.is_none() {
            return Err(BookmarkError::NotFound(id.to_string()));
        }

        let record = BookmarkRecord {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            timestamp_seconds,
        };
        let value = Self::encode(&record)?;
        self.store
            .set(&key, &value)
            .map_err(|e| BookmarkError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Removes the bookmark at `id`. Fails with `NotFound` if absent.
    fn delete(&mut self, id: &str) -> Result<(), BookmarkError> {
        let key = Self::key_for(id);
        let existing = self
            .store
            .get(&key)
            .map_err(|e| BookmarkError::Storage(e.to_string()))?;
        if existing.is_none() {
            return Err(BookmarkError::NotFound(id.to_string()));
        }

        self.store
            .remove(&key)
            .map_err(|e| BookmarkError::Storage(e.to_string()))?;
        Ok(())
    }

    fn count(&self) -> Result<usize, BookmarkError> {
        Ok(self.bookmark_keys()?.len())
    }
}
