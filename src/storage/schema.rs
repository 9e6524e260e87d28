//! Database schema and migrations
//!
//! Uses SQLite with embedded migrations managed via `PRAGMA user_version`.
//! Running the migrations is idempotent and safe on every startup.

use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: chores table.
    // AUTOINCREMENT keeps ids monotonically increasing with no reuse
    // after deletion.
    r#"
    CREATE TABLE IF NOT EXISTS chores (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        completed   INTEGER NOT NULL DEFAULT 0,
        priority    TEXT NOT NULL DEFAULT 'medium',
        created_at  DATETIME NOT NULL,
        updated_at  DATETIME NOT NULL
    );
    "#,
];

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> crate::error::Result<()> {
    let current_version: i32 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .unwrap_or(0);

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = i32::try_from(i + 1).unwrap_or(i32::MAX);
        if version > current_version {
            log::info!("running schema migration {version}");
            conn.execute_batch(migration)?;
            conn.execute(&format!("PRAGMA user_version = {version}"), [])?;
        }
    }

    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> crate::error::Result<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
}
