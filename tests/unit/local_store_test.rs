//! Unit tests for the SQLite-backed key/value store.
//!
//! These tests exercise the `LocalStore` trait through `SqliteStore`,
//! using an in-memory SQLite database.

use std::collections::HashSet;
use std::sync::Arc;

use tubemark::database::{Database, LocalStore, SqliteStore};

/// Helper: create a SqliteStore backed by a fresh in-memory database.
fn setup() -> SqliteStore {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    SqliteStore::new(Arc::new(db))
}

#[test]
fn test_set_then_get_returns_value() {
    let mut store = setup();

    store.set("alpha", "one").unwrap();

    assert_eq!(store.get("alpha").unwrap(), Some("one".to_string()));
}

#[test]
fn test_get_absent_key_returns_none() {
    let store = setup();

    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn test_set_overwrites_existing_value() {
    let mut store = setup();

    store.set("alpha", "one").unwrap();
    store.set("alpha", "two").unwrap();

    assert_eq!(store.get("alpha").unwrap(), Some("two".to_string()));
}

#[test]
fn test_remove_deletes_entry() {
    let mut store = setup();

    store.set("alpha", "one").unwrap();
    store.remove("alpha").unwrap();

    assert_eq!(store.get("alpha").unwrap(), None);
}

#[test]
fn test_remove_absent_key_is_noop() {
    let mut store = setup();

    assert!(store.remove("missing").is_ok());
}

#[test]
fn test_keys_enumerates_all_entries() {
    let mut store = setup();

    store.set("alpha", "one").unwrap();
    store.set("beta", "two").unwrap();
    store.set("gamma", "three").unwrap();

    let keys: HashSet<String> = store.keys().unwrap().into_iter().collect();
    let expected: HashSet<String> = ["alpha", "beta", "gamma"]
        .iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_keys_empty_store_returns_empty() {
    let store = setup();

    assert!(store.keys().unwrap().is_empty());
}

/// Two stores over the same database see each other's writes — the backend,
/// not the store instance, owns the data.
#[test]
fn test_stores_share_underlying_database() {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    let mut writer = SqliteStore::new(db.clone());
    let reader = SqliteStore::new(db);

    writer.set("shared", "value").unwrap();

    assert_eq!(reader.get("shared").unwrap(), Some("value".to_string()));
}
