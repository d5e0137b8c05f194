//! Category rows and the bulk edits that act on a category by name.
//!
//! Renaming and deleting work on the `exercises.category` text column; the
//! `exercise_categories` row is only ever inserted.

use log::{debug, warn};
use rusqlite::{params, Connection, Error as SqlError, ErrorCode};

use crate::error::{Result, TrackerError};
use crate::models::Category;

/// Every category row in insertion order.
pub fn fetch_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name FROM exercise_categories ORDER BY id")?;

    let categories = stmt
        .query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(categories)
}

/// Insert a category row. The name column is unique, so re-adding an existing
/// category comes back as [`TrackerError::DuplicateCategory`].
pub fn create_category(conn: &Connection, name: &str) -> Result<Category> {
    conn.execute(
        "INSERT INTO exercise_categories (name) VALUES (?1)",
        params![name],
    )
    .map_err(|err| map_unique_constraint(err, name))?;

    let id = conn.last_insert_rowid();
    debug!("created category {name} (id {id})");
    Ok(Category {
        id,
        name: name.to_string(),
    })
}

/// Move every exercise filed under `old` to `new`. Only `exercises.category`
/// changes; the `exercise_categories` row keeps its name. Returns the number
/// of exercises touched, which may be zero.
pub fn rename_category(conn: &Connection, old: &str, new: &str) -> Result<usize> {
    let updated = conn.execute(
        "UPDATE exercises SET category = ?1 WHERE category = ?2",
        params![new, old],
    )?;
    debug!("renamed category {old} -> {new} on {updated} exercises");
    Ok(updated)
}

/// Remove every exercise filed under `name`. The category row itself and any
/// goals pointing at it are left in place.
pub fn delete_category(conn: &Connection, name: &str) -> Result<usize> {
    let deleted = conn.execute("DELETE FROM exercises WHERE category = ?1", params![name])?;
    debug!("deleted {deleted} exercises from category {name}");
    Ok(deleted)
}

fn map_unique_constraint(err: SqlError, name: &str) -> TrackerError {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        warn!("duplicate category {name}");
        TrackerError::DuplicateCategory(name.to_string())
    } else {
        err.into()
    }
}
