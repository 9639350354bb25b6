use std::fmt;

// === StorageError ===

/// Errors raised by the local key/value storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// A read from the backing store failed.
    ReadFailed(String),
    /// A write to the backing store failed (e.g. quota exceeded).
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === BookmarkError ===

/// Errors related to bookmark store operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// A required field was empty or absent before a create/update.
    Validation(String),
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// A persisted record could not be encoded or decoded.
    Serialization(String),
    /// The storage backend rejected a read or write.
    Storage(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::Validation(msg) => write!(f, "Invalid bookmark: {}", msg),
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::Serialization(msg) => {
                write!(f, "Bookmark serialization error: {}", msg)
            }
            BookmarkError::Storage(msg) => write!(f, "Bookmark storage error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === HostError ===

/// Errors related to the host browser collaborator.
#[derive(Debug)]
pub enum HostError {
    /// The active tab is not on a YouTube watch page.
    NotWatchPage(String),
    /// The host browser could not be queried.
    Unavailable(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NotWatchPage(url) => {
                write!(f, "Active tab is not a YouTube watch page: {}", url)
            }
            HostError::Unavailable(msg) => write!(f, "Host browser unavailable: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

// === PopupError ===

/// Errors surfaced by popup controller actions.
#[derive(Debug)]
pub enum PopupError {
    /// The action requires a selected bookmark and none is selected.
    NoSelection,
    /// The action requires the unselected state but a bookmark is selected.
    SelectionActive(String),
    /// A required edit-buffer field is empty.
    MissingField(String),
    /// The bookmark store rejected the operation.
    Store(String),
    /// The host browser rejected the operation.
    Host(String),
}

impl fmt::Display for PopupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopupError::NoSelection => write!(f, "No bookmark selected"),
            PopupError::SelectionActive(id) => {
                write!(f, "Bookmark already selected: {}", id)
            }
            PopupError::MissingField(field) => write!(f, "Missing field: {}", field),
            PopupError::Store(msg) => write!(f, "Bookmark store error: {}", msg),
            PopupError::Host(msg) => write!(f, "Host browser error: {}", msg),
        }
    }
}

impl std::error::Error for PopupError {}
