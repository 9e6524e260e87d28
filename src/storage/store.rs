//! Chore store
//!
//! CRUD operations over the `chores` table. All operations go through a
//! single mutex-guarded connection: SQLite assigns ids on insert, and the
//! mutex guarantees that two concurrent creates can never race on that
//! assignment or interleave their writes.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::error::{Error, Result};
use crate::models::{Chore, ChoreUpdate, NewChore, Priority};

/// Database handle owning the single SQLite connection
pub struct ChoreStore {
    conn: Mutex<Connection>,
}

impl std::fmt::Debug for ChoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChoreStore").finish_non_exhaustive()
    }
}

impl ChoreStore {
    /// Open or create a database at the given path and run migrations
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        super::schema::run_migrations(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        super::schema::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// List all chores, ordered by id ascending (stable, deterministic)
    pub fn list(&self) -> Result<Vec<Chore>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, description, completed, priority, created_at, updated_at
             FROM chores ORDER BY id ASC",
        )?;
        let chores = stmt
            .query_map([], row_to_chore)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(chores)
    }

    /// Get a single chore by id
    pub fn get(&self, id: i64) -> Result<Chore> {
        let conn = self.conn.lock().unwrap();
        fetch(&conn, id)
    }

    /// Create a new chore, assigning the next id and both timestamps
    ///
    /// Fails with a validation error if the title is empty after trimming;
    /// nothing is inserted in that case.
    pub fn create(&self, new: &NewChore) -> Result<Chore> {
        let title = validate_title(&new.title)?;
        let description = new.description.clone().unwrap_or_default();
        let priority = new.priority.unwrap_or_default();
        let now = Utc::now();

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO chores (title, description, completed, priority, created_at, updated_at)
             VALUES (?1, ?2, 0, ?3, ?4, ?4)",
            params![title, description, priority.to_string(), now],
        )?;
        let id = conn.last_insert_rowid();

        fetch(&conn, id)
    }

    /// Partially update a chore: only supplied fields change
    ///
    /// A supplied title is re-validated; `updated_at` is refreshed on
    /// every successful call, even when no field actually changed.
    pub fn update(&self, id: i64, update: &ChoreUpdate) -> Result<Chore> {
        let conn = self.conn.lock().unwrap();
        let existing = fetch(&conn, id)?;

        let title = match &update.title {
            Some(t) => validate_title(t)?,
            None => existing.title,
        };
        let description = update
            .description
            .clone()
            .unwrap_or(existing.description);
        let priority = update.priority.unwrap_or(existing.priority);
        let completed = update.completed.unwrap_or(existing.completed);
        let now = Utc::now();

        conn.execute(
            "UPDATE chores
             SET title = ?1, description = ?2, completed = ?3, priority = ?4, updated_at = ?5
             WHERE id = ?6",
            params![title, description, completed, priority.to_string(), now, id],
        )?;

        fetch(&conn, id)
    }

    /// Delete a chore by id
    ///
    /// Deleting an absent id fails with `NotFound`, so a second delete of
    /// the same id is a clean error, never a crash.
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute("DELETE FROM chores WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }
}

/// Validate and normalize a chore title
fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("title", "title cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Fetch one chore by id on an already-locked connection
fn fetch(conn: &Connection, id: i64) -> Result<Chore> {
    conn.query_row(
        "SELECT id, title, description, completed, priority, created_at, updated_at
         FROM chores WHERE id = ?1",
        params![id],
        row_to_chore,
    )
    .optional()?
    .ok_or(Error::NotFound(id))
}

/// Map a database row to a `Chore`
fn row_to_chore(row: &Row<'_>) -> rusqlite::Result<Chore> {
    let priority: String = row.get(4)?;
    let priority = priority.parse::<Priority>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })?;

    Ok(Chore {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        priority,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
