use rusqlite::Connection;
use todolist_core::db::migrations::{apply_migrations, latest_version};
use todolist_core::db::{open_db_in_memory, DbError};

#[test]
fn open_db_applies_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    // The todos table must stay usable after a redundant apply pass.
    conn.execute(
        "INSERT INTO todos (id, todo, status) VALUES ('t-1', 'check', 0);",
        [],
    )
    .unwrap();
}

#[test]
fn newer_schema_than_binary_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(err, DbError::UnsupportedSchemaVersion { .. }));
}
