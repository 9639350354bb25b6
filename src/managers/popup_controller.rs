//! Popup controller for tubemark.
//!
//! Holds the popup's in-memory state — the edit buffer, the active
//! selection, and the displayed bookmark list — and maps popup actions to
//! bookmark store mutations. All persistence goes through the injected
//! store; the controller never touches the key/value backend directly.

use crate::database::local_store::LocalStore;
use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::host_browser::{self, HostBrowser};
use crate::types::bookmark::BookmarkRecord;
use crate::types::errors::{HostError, PopupError};
use crate::types::popup::EditBuffer;
use crate::types::video::VideoInfo;

/// Trait defining the popup controller operations.
pub trait PopupControllerTrait {
    fn load_from_video(&mut self, info: &VideoInfo);
    fn fetch_from_host(&mut self, host: &dyn HostBrowser) -> Result<(), HostError>;
    fn select_bookmark(&mut self, id: &str) -> Result<(), PopupError>;
    fn save_new(&mut self) -> Result<String, PopupError>;
    fn commit_edit(&mut self) -> Result<(), PopupError>;
    fn remove_selected(&mut self) -> Result<(), PopupError>;
    fn refresh(&mut self) -> Result<(), PopupError>;
    fn toggle_list_visible(&mut self) -> Result<bool, PopupError>;
    fn open_current(&self, host: &dyn HostBrowser) -> Result<String, PopupError>;
    fn edit_buffer(&self) -> &EditBuffer;
    fn edit_buffer_mut(&mut self) -> &mut EditBuffer;
    fn selected_id(&self) -> Option<&str>;
    fn list_visible(&self) -> bool;
    fn bookmarks(&self) -> &[BookmarkRecord];
}

/// Popup controller owning the bookmark store and the popup's edit state.
pub struct PopupController<S: LocalStore> {
    store: BookmarkStore<S>,
    edit_buffer: EditBuffer,
    selected_id: Option<String>,
    list_visible: bool,
    bookmarks: Vec<BookmarkRecord>,
}

impl<S: LocalStore> PopupController<S> {
    /// Creates a new controller over the given bookmark store.
    ///
    /// Starts unselected, with an empty buffer and the list hidden.
    pub fn new(store: BookmarkStore<S>) -> Self {
        Self {
            store,
            edit_buffer: EditBuffer::default(),
            selected_id: None,
            list_visible: false,
            bookmarks: Vec::new(),
        }
    }

    /// Read access to the underlying bookmark store.
    pub fn store(&self) -> &BookmarkStore<S> {
        &self.store
    }

    /// Buffer fields required before a save/commit, or the first missing one.
    fn validated_buffer(&self) -> Result<(String, String, u64), PopupError> {
        if self.edit_buffer.title.is_empty() {
            return Err(PopupError::MissingField("title".to_string()));
        }
        if self.edit_buffer.url.is_empty() {
            return Err(PopupError::MissingField("url".to_string()));
        }
        let timestamp = self
            .edit_buffer
            .timestamp_seconds
            .ok_or_else(|| PopupError::MissingField("timestamp".to_string()))?;
        Ok((
            self.edit_buffer.title.clone(),
            self.edit_buffer.url.clone(),
            timestamp,
        ))
    }
}

impl<S: LocalStore> PopupControllerTrait for PopupController<S> {
    /// Overwrites the edit buffer with freshly fetched video metadata and
    /// drops any active selection. A commit that follows a fetch can only
    /// ever target a record selected after the fetch.
    fn load_from_video(&mut self, info: &VideoInfo) {
        self.selected_id = None;
        self.edit_buffer.title = info.title.clone();
        self.edit_buffer.url = info.url.clone();
        self.edit_buffer.timestamp_seconds = Some(info.timestamp_seconds);
    }

    /// One-shot fetch from the active tab.
    ///
    /// Reports guidance instead of querying when the active tab is not a
    /// watch page. On success the result lands in the edit buffer via
    /// `load_from_video`.
    fn fetch_from_host(&mut self, host: &dyn HostBrowser) -> Result<(), HostError> {
        let url = host.active_tab_url()?;
        if !host_browser::is_watch_url(&url) {
            return Err(HostError::NotWatchPage(url));
        }
        let info = host.query_video()?;
        self.load_from_video(&info);
        Ok(())
    }

    /// Selects a bookmark and stages its fields for editing.
    ///
    /// The selection is recorded even if the record has vanished from the
    /// store since the list was refreshed; in that case the buffer is left
    /// untouched.
    fn select_bookmark(&mut self, id: &str) -> Result<(), PopupError> {
        self.selected_id = Some(id.to_string());
        let record = self
            .store
            .get(id)
            .map_err(|e| PopupError::Store(e.to_string()))?;
        if let Some(record) = record {
            self.edit_buffer.title = record.title;
            self.edit_buffer.url = record.url;
            self.edit_buffer.timestamp_seconds = Some(record.timestamp_seconds);
        }
        Ok(())
    }

    /// Persists the edit buffer as a new bookmark and clears the buffer.
    ///
    /// Only available while unselected. With a selection active the staged
    /// fields belong to the selected record and go through `commit_edit`.
    fn save_new(&mut self) -> Result<String, PopupError> {
        if let Some(id) = &self.selected_id {
            return Err(PopupError::SelectionActive(id.clone()));
        }
        let (title, url, timestamp) = self.validated_buffer()?;
        let id = self
            .store
            .create(&title, &url, timestamp)
            .map_err(|e| PopupError::Store(e.to_string()))?;
        self.edit_buffer.clear();
        Ok(id)
    }

    /// Writes the edit buffer over the selected bookmark.
    ///
    /// Clears the selection and refreshes the displayed list on success.
    fn commit_edit(&mut self) -> Result<(), PopupError> {
        let id = self
            .selected_id
            .clone()
            .ok_or(PopupError::NoSelection)?;
        let (title, url, timestamp) = self.validated_buffer()?;
        self.store
            .update(&id, &title, &url, timestamp)
            .map_err(|e| PopupError::Store(e.to_string()))?;
        self.selected_id = None;
        self.refresh()
    }

    /// Deletes the selected bookmark.
    ///
    /// Clears the selection and the buffer, then refreshes the list.
    fn remove_selected(&mut self) -> Result<(), PopupError> {
        let id = self
            .selected_id
            .clone()
            .ok_or(PopupError::NoSelection)?;
        self.store
            .delete(&id)
            .map_err(|e| PopupError::Store(e.to_string()))?;
        self.selected_id = None;
        self.edit_buffer.clear();
        self.refresh()
    }

    /// Reloads the displayed list from the store.
    fn refresh(&mut self) -> Result<(), PopupError> {
        self.bookmarks = self
            .store
            .list_all()
            .map_err(|e| PopupError::Store(e.to_string()))?;
        Ok(())
    }

    /// Flips list visibility. Becoming visible refreshes the snapshot.
    ///
    /// Returns the new visibility state.
    fn toggle_list_visible(&mut self) -> Result<bool, PopupError> {
        self.list_visible = !self.list_visible;
        if self.list_visible {
            self.refresh()?;
        }
        Ok(self.list_visible)
    }

    /// Opens the buffered video at its buffered timestamp in a new tab.
    ///
    /// Returns the URL that was opened.
    fn open_current(&self, host: &dyn HostBrowser) -> Result<String, PopupError> {
        if self.edit_buffer.url.is_empty() {
            return Err(PopupError::MissingField("url".to_string()));
        }
        let timestamp = self
            .edit_buffer
            .timestamp_seconds
            .ok_or_else(|| PopupError::MissingField("timestamp".to_string()))?;
        let url = host_browser::timestamped_url(&self.edit_buffer.url, timestamp);
        host.open_tab(&url)
            .map_err(|e| PopupError::Host(e.to_string()))?;
        Ok(url)
    }

    fn edit_buffer(&self) -> &EditBuffer {
        &self.edit_buffer
    }

    /// Mutable access to the staged fields; the popup's inputs write here.
    fn edit_buffer_mut(&mut self) -> &mut EditBuffer {
        &mut self.edit_buffer
    }

    fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    fn list_visible(&self) -> bool {
        self.list_visible
    }

    fn bookmarks(&self) -> &[BookmarkRecord] {
        &self.bookmarks
    }
}
