//! tubemark database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key/value storage interface the bookmark store persists through.
//!
//! # Usage
//!
//! ```no_run
//! use tubemark::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("tubemark.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! ```

pub mod connection;
pub mod local_store;
pub mod migrations;

pub use connection::Database;
pub use local_store::{LocalStore, SqliteStore};
