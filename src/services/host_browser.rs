//! Host browser collaborator interface for tubemark.
//!
//! The popup core never talks to tab or scripting APIs directly; it goes
//! through `HostBrowser`, implemented by the extension glue outside this
//! crate. The metadata query is an opaque one-shot call — if the popup
//! closes before it resolves, the host simply drops the pending result.

use crate::types::errors::HostError;
use crate::types::video::VideoInfo;

/// URL substring identifying a YouTube watch page.
const WATCH_URL_PATTERN: &str = "youtube.com/watch";

/// Trait defining the host browser operations the popup depends on.
pub trait HostBrowser {
    /// URL of the currently active tab.
    fn active_tab_url(&self) -> Result<String, HostError>;
    /// Extracts `{title, url, timestamp}` from the video playing in the
    /// active tab.
    fn query_video(&self) -> Result<VideoInfo, HostError>;
    /// Opens a new tab at the given URL.
    fn open_tab(&self, url: &str) -> Result<(), HostError>;
}

/// Whether `url` points at a YouTube watch page.
pub fn is_watch_url(url: &str) -> bool {
    url.contains(WATCH_URL_PATTERN)
}

/// Appends the playback-offset fragment to a watch URL.
///
/// The stored URL never carries a time fragment; it is appended only when
/// reopening, so `https://www.youtube.com/watch?v=x` at 90 seconds becomes
/// `https://www.youtube.com/watch?v=x&t=90s`.
pub fn timestamped_url(url: &str, timestamp_seconds: u64) -> String {
    format!("{}&t={}s", url, timestamp_seconds)
}
