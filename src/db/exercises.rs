use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Result, TrackerError};
use crate::models::{Exercise, NewExercise};

fn exercise_from_row(row: &Row<'_>) -> rusqlite::Result<Exercise> {
    Ok(Exercise {
        id: row.get(0)?,
        category: row.get(1)?,
        name: row.get(2)?,
        muscle_group: row.get(3)?,
        reps: row.get(4)?,
        sets: row.get(5)?,
    })
}

/// Insert one exercise. Duplicates are allowed; the same `(category, name)`
/// pair can be stored any number of times.
pub fn create_exercise(conn: &Connection, exercise: &NewExercise) -> Result<Exercise> {
    conn.execute(
        "INSERT INTO exercises (category, name, muscle_group, reps, sets)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            exercise.category,
            exercise.name,
            exercise.muscle_group,
            exercise.reps,
            exercise.sets
        ],
    )?;

    let id = conn.last_insert_rowid();
    debug!("created exercise {} (id {id})", exercise.name);
    Ok(Exercise {
        id,
        category: exercise.category.clone(),
        name: Some(exercise.name.clone()),
        muscle_group: Some(exercise.muscle_group.clone()),
        reps: Some(exercise.reps),
        sets: Some(exercise.sets),
    })
}

/// All exercises filed under `category`, oldest first.
pub fn fetch_exercises_by_category(conn: &Connection, category: &str) -> Result<Vec<Exercise>> {
    let mut stmt = conn.prepare(
        "SELECT id, category, name, muscle_group, reps, sets
         FROM exercises
         WHERE category = ?1
         ORDER BY id",
    )?;

    let exercises = stmt
        .query_map([category], exercise_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(exercises)
}

/// Exercises matching both category and name. More than one row is possible.
pub fn fetch_exercises_named(
    conn: &Connection,
    category: &str,
    name: &str,
) -> Result<Vec<Exercise>> {
    let mut stmt = conn.prepare(
        "SELECT id, category, name, muscle_group, reps, sets
         FROM exercises
         WHERE category = ?1 AND name = ?2
         ORDER BY id",
    )?;

    let exercises = stmt
        .query_map(params![category, name], exercise_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(exercises)
}

/// Menu action 3. Looks the input up as an exercise *name*, then deletes by a
/// `category_id` column the schema never declares, so a found exercise always
/// ends in [`TrackerError::Storage`] and an unknown name in
/// [`TrackerError::NotFound`]. Whole-category deletion is
/// [`crate::db::delete_category`].
pub fn delete_exercise_by_category(conn: &Connection, category_name: &str) -> Result<usize> {
    let exercise_id: Option<i64> = conn
        .query_row(
            "SELECT id FROM exercises WHERE name = ?1",
            params![category_name],
            |row| row.get(0),
        )
        .optional()?;

    let Some(exercise_id) = exercise_id else {
        return Err(TrackerError::NotFound(format!(
            "category '{category_name}'"
        )));
    };

    let deleted = conn
        .execute(
            "DELETE FROM exercises WHERE category_id = ?1",
            params![exercise_id],
        )
        .inspect_err(|err| warn!("delete by category_id failed: {err}"))?;
    Ok(deleted)
}
