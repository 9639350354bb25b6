use serde::{Deserialize, Serialize};

/// The popup's staged input fields.
///
/// A disconnected snapshot: editing the buffer never touches the store until
/// an explicit save or commit. `timestamp_seconds` is `None` while the
/// timestamp field is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub url: String,
    pub timestamp_seconds: Option<u64>,
}

impl EditBuffer {
    /// True when no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.url.is_empty() && self.timestamp_seconds.is_none()
    }

    /// Resets all fields to their empty state.
    pub fn clear(&mut self) {
        self.title.clear();
        self.url.clear();
        self.timestamp_seconds = None;
    }
}
