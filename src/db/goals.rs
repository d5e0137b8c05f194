//! Rep and set targets per category. Goals are append-only: setting a new
//! goal never replaces an older one, and progress reports decide which rows
//! to read.

use log::debug;
use rusqlite::{params, Connection};

use crate::error::Result;
use crate::models::Goal;

/// Record a goal for `category`. Earlier goals for the same category are kept.
pub fn create_goal(
    conn: &Connection,
    category: &str,
    goal_reps: i64,
    goal_sets: i64,
) -> Result<Goal> {
    conn.execute(
        "INSERT INTO goals (category, goal_reps, goal_sets) VALUES (?1, ?2, ?3)",
        params![category, goal_reps, goal_sets],
    )?;

    let id = conn.last_insert_rowid();
    debug!("created goal {goal_reps}x{goal_sets} for {category} (id {id})");
    Ok(Goal {
        id,
        category: category.to_string(),
        goal_reps,
        goal_sets,
    })
}

/// Goals for `category`, oldest first.
pub fn fetch_goals(conn: &Connection, category: &str) -> Result<Vec<Goal>> {
    let mut stmt = conn.prepare(
        "SELECT id, category, goal_reps, goal_sets FROM goals WHERE category = ?1 ORDER BY id",
    )?;

    let goals = stmt
        .query_map([category], |row| {
            Ok(Goal {
                id: row.get(0)?,
                category: row.get(1)?,
                goal_reps: row.get(2)?,
                goal_sets: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(goals)
}
