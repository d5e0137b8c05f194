//! Completion percentages for a single exercise or a whole category, measured
//! against the goals recorded for that category.

use log::debug;
use rusqlite::{params, Connection};

use crate::error::{Result, TrackerError};
use crate::models::Progress;

use super::exercises::fetch_exercises_named;
use super::goals::fetch_goals;

/// `completed / goal * 100`, or `0.0` when the goal is exactly zero.
pub fn percentage(completed: i64, goal: i64) -> f64 {
    if goal == 0 {
        0.0
    } else {
        completed as f64 / goal as f64 * 100.0
    }
}

/// Progress of one exercise against the category's first recorded goal.
///
/// Exactly one exercise must match `(category, name)`; zero matches is
/// [`TrackerError::NotFound`] and several is
/// [`TrackerError::AmbiguousExercise`]. A category without goals, or an
/// exercise stored without reps or sets, is [`TrackerError::MissingGoal`].
pub fn exercise_progress(conn: &Connection, category: &str, name: &str) -> Result<Progress> {
    let matches = fetch_exercises_named(conn, category, name)?;
    let exercise = match matches.as_slice() {
        [exercise] => exercise,
        [] => {
            return Err(TrackerError::NotFound(format!(
                "exercise '{name}' in category '{category}'"
            )))
        }
        _ => {
            return Err(TrackerError::AmbiguousExercise {
                category: category.to_string(),
                name: name.to_string(),
                count: matches.len(),
            })
        }
    };

    let goal = fetch_goals(conn, category)?
        .into_iter()
        .next()
        .ok_or_else(|| TrackerError::MissingGoal(category.to_string()))?;

    // An exercise stored without counts has nothing to measure.
    let (Some(reps), Some(sets)) = (exercise.reps, exercise.sets) else {
        return Err(TrackerError::MissingGoal(category.to_string()));
    };

    debug!(
        "progress for {category}/{name}: {reps}x{sets} against {}x{}",
        goal.goal_reps, goal.goal_sets
    );
    Ok(Progress {
        reps_percent: percentage(reps, goal.goal_reps),
        sets_percent: percentage(sets, goal.goal_sets),
    })
}

/// Progress of a whole category: summed exercise reps and sets against the
/// summed goals. No goal rows is [`TrackerError::MissingGoal`]; a non-zero
/// goal with no exercises to sum is [`TrackerError::NotFound`].
pub fn goal_progress(conn: &Connection, category: &str) -> Result<Progress> {
    let (completed_reps, completed_sets): (Option<i64>, Option<i64>) = conn.query_row(
        "SELECT SUM(reps), SUM(sets) FROM exercises WHERE category = ?1",
        params![category],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let (goal_reps, goal_sets): (Option<i64>, Option<i64>) = conn.query_row(
        "SELECT SUM(goal_reps), SUM(goal_sets) FROM goals WHERE category = ?1",
        params![category],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let (Some(goal_reps), Some(goal_sets)) = (goal_reps, goal_sets) else {
        return Err(TrackerError::MissingGoal(category.to_string()));
    };

    debug!(
        "goal progress for {category}: {completed_reps:?}x{completed_sets:?} against {goal_reps}x{goal_sets}"
    );
    Ok(Progress {
        reps_percent: summed_percentage(completed_reps, goal_reps, category)?,
        sets_percent: summed_percentage(completed_sets, goal_sets, category)?,
    })
}

/// A zero goal is 0% whether or not anything was completed; otherwise the
/// completed sum has to exist.
fn summed_percentage(completed: Option<i64>, goal: i64, category: &str) -> Result<f64> {
    if goal == 0 {
        return Ok(0.0);
    }
    completed
        .map(|completed| percentage(completed, goal))
        .ok_or_else(|| TrackerError::NotFound(format!("exercises in category '{category}'")))
}
