//! App Core for tubemark.
//!
//! Central struct wiring the database, the bookmark store, and the popup
//! controller, managing application lifecycle.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::database::local_store::SqliteStore;
use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::popup_controller::{PopupController, PopupControllerTrait};

/// Central application struct holding the popup core.
pub struct App {
    pub db: Arc<Database>,
    pub popup: PopupController<SqliteStore>,
}

impl App {
    /// Creates a new App over a persistent database at `db_path`.
    ///
    /// Opens the database (running migrations) and wires the bookmark store
    /// into a fresh popup controller.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        Ok(Self::with_database(db))
    }

    /// Creates a new App over an in-memory database, for tests and demos.
    pub fn open_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);
        Ok(Self::with_database(db))
    }

    fn with_database(db: Arc<Database>) -> Self {
        let store = BookmarkStore::new(SqliteStore::new(db.clone()));
        let popup = PopupController::new(store);
        Self { db, popup }
    }

    /// Startup sequence: populate the popup's list snapshot.
    pub fn startup(&mut self) {
        let _ = self.popup.refresh();
    }
}
