use serde::{Deserialize, Serialize};

/// Metadata extracted from the video playing in the active browser tab.
///
/// This is the single result object of the one-shot host query: page title
/// (with the site suffix already stripped), canonical watch URL, and the
/// current playback offset rounded down to whole seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoInfo {
    pub title: String,
    pub url: String,
    pub timestamp_seconds: u64,
}
