use std::fs;
use std::path::Path;

use log::{debug, info};
use rusqlite::Connection;

use crate::error::Result;

/// The four tables, created with `IF NOT EXISTS` so reopening an existing
/// store is a no-op. Foreign keys are declared but not enforced, so category
/// names behave as plain text copies.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS exercise_categories (
        id INTEGER PRIMARY KEY,
        name TEXT UNIQUE
    );
    CREATE TABLE IF NOT EXISTS exercises (
        id INTEGER PRIMARY KEY,
        category TEXT,
        name TEXT,
        muscle_group TEXT,
        reps INTEGER,
        sets INTEGER,
        FOREIGN KEY (category) REFERENCES exercise_categories (name)
    );
    CREATE TABLE IF NOT EXISTS workouts (
        id INTEGER PRIMARY KEY,
        exercise_id INTEGER,
        reps INTEGER,
        sets INTEGER,
        date DATE,
        FOREIGN KEY (exercise_id) REFERENCES exercises (id)
    );
    CREATE TABLE IF NOT EXISTS goals (
        id INTEGER PRIMARY KEY,
        category TEXT,
        goal_reps INTEGER,
        goal_sets INTEGER,
        FOREIGN KEY (category) REFERENCES exercise_categories (name)
    );
";

/// Open (creating if needed) the store at `path` and make sure every table
/// exists. Missing parent directories are created first.
pub fn ensure_schema_at(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let existed = path.exists();
    let conn = Connection::open(path)?;
    create_tables(&conn)?;

    if existed {
        debug!("opened existing store at {}", path.display());
    } else {
        info!("created new store at {}", path.display());
    }
    Ok(conn)
}

/// Open a throwaway store with the full schema. Used by tests.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(conn)
}

/// The bundled SQLite turns foreign keys on by default, so they are switched
/// off per connection before the schema is touched.
fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
