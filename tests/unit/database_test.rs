//! Unit tests for the tubemark database layer (connection + migrations).

use tempfile::TempDir;
use tubemark::database::migrations;
use tubemark::database::Database;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_all_tables() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let expected_tables = ["local_store", "schema_version"];

    for table in &expected_tables {
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .unwrap_or(false);
        assert!(exists, "Table '{}' should exist after migrations", table);
    }
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().expect("open_in_memory failed");

    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

/// Opening the same file twice must be safe (migrations are idempotent) and
/// must preserve stored data across the reopen.
#[test]
fn test_reopen_preserves_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tubemark.db");

    {
        let db = Database::open(&path).expect("first open failed");
        db.connection()
            .execute(
                "INSERT INTO local_store (key, value) VALUES (?1, ?2)",
                ("yt-bookmark-demo", "{}"),
            )
            .unwrap();
    }

    let db = Database::open(&path).expect("reopen failed");
    let value: String = db
        .connection()
        .query_row(
            "SELECT value FROM local_store WHERE key = ?1",
            ["yt-bookmark-demo"],
            |row| row.get(0),
        )
        .expect("stored row should survive reopen");
    assert_eq!(value, "{}");
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}
