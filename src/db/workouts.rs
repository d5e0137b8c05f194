//! Workout routines: picking exercises from a category by position and
//! recording the picks in the `workouts` table.

use chrono::NaiveDate;
use log::debug;
use rusqlite::{params, Connection};

use crate::error::{Result, TrackerError};
use crate::models::{Exercise, WorkoutEntry};

/// Resolve a comma-separated list of 1-based positions against `exercises`.
/// Positions outside the list are skipped; anything that is not an integer
/// fails the whole selection.
pub fn select_routine<'a>(exercises: &'a [Exercise], selection: &str) -> Result<Vec<&'a Exercise>> {
    let mut routine = Vec::new();
    for part in selection.split(',') {
        let trimmed = part.trim();
        let position: i64 = trimmed.parse().map_err(|_| TrackerError::InvalidNumber {
            field: "exercise number",
            input: trimmed.to_string(),
        })?;

        let picked = usize::try_from(position)
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| exercises.get(index));
        if let Some(exercise) = picked {
            routine.push(exercise);
        }
    }
    Ok(routine)
}

/// Store one `workouts` row per routine exercise, copying its default reps
/// and sets. Returns the stored entries.
pub fn log_routine(
    conn: &Connection,
    routine: &[&Exercise],
    date: NaiveDate,
) -> Result<Vec<WorkoutEntry>> {
    let date = date.format("%Y-%m-%d").to_string();
    let mut entries = Vec::with_capacity(routine.len());

    for exercise in routine {
        conn.execute(
            "INSERT INTO workouts (exercise_id, reps, sets, date) VALUES (?1, ?2, ?3, ?4)",
            params![exercise.id, exercise.reps, exercise.sets, date],
        )?;
        entries.push(WorkoutEntry {
            id: conn.last_insert_rowid(),
            exercise_id: exercise.id,
            reps: exercise.reps,
            sets: exercise.sets,
            date: date.clone(),
        });
    }

    debug!("logged {} workout entries for {date}", entries.len());
    Ok(entries)
}

/// Every logged workout entry, oldest first.
pub fn fetch_workouts(conn: &Connection) -> Result<Vec<WorkoutEntry>> {
    let mut stmt =
        conn.prepare("SELECT id, exercise_id, reps, sets, date FROM workouts ORDER BY id")?;

    let entries = stmt
        .query_map([], |row| {
            Ok(WorkoutEntry {
                id: row.get(0)?,
                exercise_id: row.get(1)?,
                reps: row.get(2)?,
                sets: row.get(3)?,
                date: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{fetch_exercises_by_category, open_in_memory, seed_all};

    fn names(routine: &[&Exercise]) -> Vec<String> {
        routine
            .iter()
            .map(|exercise| exercise.display_name().to_string())
            .collect()
    }

    #[test]
    fn picks_by_one_based_position() {
        let conn = open_in_memory().unwrap();
        seed_all(&conn).unwrap();
        let cardio = fetch_exercises_by_category(&conn, "Cardio").unwrap();

        let routine = select_routine(&cardio, "3, 1").unwrap();
        assert_eq!(names(&routine), vec!["Jump Rope", "Running"]);
    }

    #[test]
    fn out_of_range_positions_are_skipped() {
        let conn = open_in_memory().unwrap();
        seed_all(&conn).unwrap();
        let cardio = fetch_exercises_by_category(&conn, "Cardio").unwrap();

        let routine = select_routine(&cardio, "0,2,4,-1").unwrap();
        assert_eq!(names(&routine), vec!["Cycling"]);
    }

    #[test]
    fn huge_positions_are_skipped() {
        let conn = open_in_memory().unwrap();
        seed_all(&conn).unwrap();
        let cardio = fetch_exercises_by_category(&conn, "Cardio").unwrap();

        let selection = format!("{},{},2", i64::MAX, u32::MAX as i64 + 2);
        let routine = select_routine(&cardio, &selection).unwrap();
        assert_eq!(names(&routine), vec!["Cycling"]);
    }

    #[test]
    fn exercises_without_counts_log_empty_counts() {
        let conn = open_in_memory().unwrap();
        conn.execute("INSERT INTO exercises (category, name) VALUES ('Balance', 'Tree Pose')", [])
            .unwrap();
        let balance = fetch_exercises_by_category(&conn, "Balance").unwrap();
        let routine = select_routine(&balance, "1").unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

        let logged = log_routine(&conn, &routine, date).unwrap();
        assert_eq!(logged[0].reps, None);
        assert_eq!(fetch_workouts(&conn).unwrap(), logged);
    }

    #[test]
    fn non_numeric_selection_fails() {
        let err = select_routine(&[], "1,two").unwrap_err();
        assert!(matches!(
            err,
            TrackerError::InvalidNumber { ref input, .. } if input == "two"
        ));
    }

    #[test]
    fn logging_a_routine_persists_entries() {
        let conn = open_in_memory().unwrap();
        seed_all(&conn).unwrap();
        let core = fetch_exercises_by_category(&conn, "Core").unwrap();
        let routine = select_routine(&core, "2").unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

        let logged = log_routine(&conn, &routine, date).unwrap();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].reps, Some(20));
        assert_eq!(logged[0].sets, Some(3));
        assert_eq!(logged[0].date, "2026-10-15");
        assert_eq!(fetch_workouts(&conn).unwrap(), logged);
    }
}
