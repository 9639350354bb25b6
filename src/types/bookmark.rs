use serde::{Deserialize, Serialize};

/// A saved moment in a YouTube video.
///
/// Records are persisted as JSON strings in the local key/value store under
/// a `yt-bookmark-` prefixed key. The `id` is generated at creation time and
/// never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookmarkRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    pub timestamp_seconds: u64,
}
