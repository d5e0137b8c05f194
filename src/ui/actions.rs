//! One interactive flow per menu entry. Each flow gathers its input through the
//! [`Prompter`], runs the matching repository call, and prints the outcome.
//! Failures are returned to the caller, which reports them and redraws the menu.

use std::io::{BufRead, Write};

use chrono::Local;
use log::{info, warn};
use rusqlite::Connection;

use crate::db::{
    create_category, create_exercise, create_goal, delete_category, delete_exercise_by_category,
    exercise_progress, fetch_exercises_by_category, goal_progress, log_routine, rename_category,
    select_routine,
};
use crate::error::{Result, TrackerError};
use crate::models::NewExercise;

use super::helpers::{format_percent, surface_error};
use super::prompt::Prompter;

/// Menu 1. Adding a category opens a small follow-up menu for it.
pub fn add_exercise_category<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter exercise category: ")?;
    create_category(conn, &category)?;
    prompter.info("Exercise category added successfully.")?;

    loop {
        prompter.line("\nAdditional actions:")?;
        prompter.line("1. Update exercise category")?;
        prompter.line("2. Delete exercise category")?;
        prompter.line("3. Back to main menu")?;

        let Some(choice) = prompter.read_line("Enter your choice: ")? else {
            return Ok(());
        };
        let outcome = match choice.trim() {
            "1" => update_exercise_category(conn, prompter),
            "2" => delete_exercise_category(conn, prompter, &category),
            "3" => return Ok(()),
            _ => {
                prompter.error("Invalid choice. Please try again.")?;
                continue;
            }
        };

        if let Err(err) = outcome {
            warn!("category follow-up failed: {err}");
            prompter.error(&surface_error(&err))?;
        }
    }
}

/// Rename the category on every exercise. The old name is asked for again
/// instead of reusing the category that opened the follow-up menu.
pub fn update_exercise_category<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let old = prompter.ask("Enter old workout category: ")?;
    let new = prompter.ask("Enter new workout category: ")?;
    let updated = rename_category(conn, &old, &new)?;
    info!("moved {updated} exercises from {old} to {new}");
    prompter.info("Workout category updated successfully.")
}

pub fn delete_exercise_category<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
    category: &str,
) -> Result<()> {
    delete_category(conn, category)?;
    prompter.info(&format!(
        "Exercise category '{category}' deleted successfully."
    ))
}

/// Menu 4.
pub fn add_new_exercise<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter workout category: ")?;
    let name = prompter.ask("Enter exercise name: ")?;
    let muscle_group = prompter.ask("Enter muscle group: ")?;
    let reps = prompter.ask_number("Enter number of reps: ", "reps")?;
    let sets = prompter.ask_number("Enter number of sets: ", "sets")?;

    create_exercise(
        conn,
        &NewExercise::new(&category, &name, &muscle_group, reps, sets),
    )?;
    prompter.info("Exercise added successfully.")
}

/// Menu 2. A non-empty listing flows straight into adding an exercise; an
/// empty one goes back to the menu.
pub fn view_exercises_by_category<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter workout category to view exercises: ")?;
    let exercises = fetch_exercises_by_category(conn, &category)?;

    if exercises.is_empty() {
        return prompter.line("\nNo exercises found in this category.");
    }

    for exercise in &exercises {
        prompter.line(exercise)?;
    }
    add_new_exercise(conn, prompter)
}

/// Menu 3.
pub fn delete_exercise<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter workout category to delete exercises from: ")?;

    match delete_exercise_by_category(conn, &category) {
        Ok(_) => prompter.info(&format!(
            "Exercises deleted successfully from category '{category}'."
        )),
        Err(TrackerError::NotFound(_)) => {
            prompter.line(format!("Category '{category}' does not exist."))
        }
        Err(err) => Err(err),
    }
}

/// Menu 5. The chosen exercises are printed and logged as today's workout.
pub fn create_workout_routine<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter workout category to create routine: ")?;
    let exercises = fetch_exercises_by_category(conn, &category)?;

    if exercises.is_empty() {
        return prompter.line("No exercises found in this category.");
    }

    prompter.line(format!("Available exercises in category '{category}':"))?;
    for (position, exercise) in exercises.iter().enumerate() {
        prompter.line(format!("{}. {}", position + 1, exercise.display_name()))?;
    }

    let selection = prompter
        .ask("Enter the numbers of exercises to add to the routine (comma-separated): ")?;
    let routine = select_routine(&exercises, &selection)?;

    prompter.line(format!("Workout routine for Category '{category}':"))?;
    for exercise in &routine {
        prompter.line(format!("- {}", exercise.display_name()))?;
    }

    let today = Local::now().date_naive();
    let logged = log_routine(conn, &routine, today)?;
    prompter.info(&format!("Logged {} exercises for {today}.", logged.len()))
}

/// Menu 6.
pub fn view_workout_routine<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter workout category to view routine: ")?;
    let exercises = fetch_exercises_by_category(conn, &category)?;

    if exercises.is_empty() {
        return prompter.line("No exercises found in this category.");
    }

    prompter.line(format!("Workout Routine for Category '{category}':"))?;
    for exercise in &exercises {
        prompter.line(format!("- {}", exercise.display_name()))?;
    }
    Ok(())
}

/// Menu 7.
pub fn view_exercise_progress<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter workout category to view progress: ")?;
    let name = prompter.ask("Enter exercise name: ")?;
    let progress = exercise_progress(conn, &category, &name)?;

    prompter.line(format!(
        "Exercise progress for category '{category}' based on reps: {}",
        format_percent(progress.reps_percent)
    ))?;
    prompter.line(format!(
        "Exercise progress for category '{category}' based on sets: {}",
        format_percent(progress.sets_percent)
    ))
}

/// Menu 8.
pub fn set_fitness_goals<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter goal category: ")?;
    let goal_reps = prompter.ask_number("Enter goal reps: ", "goal reps")?;
    let goal_sets = prompter.ask_number("Enter goal sets: ", "goal sets")?;

    create_goal(conn, &category, goal_reps, goal_sets)?;
    prompter.info("Fitness goals set successfully.")
}

/// Menu 9.
pub fn view_progress_towards_fitness_goals<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let category = prompter.ask("Enter goal category to view progress: ")?;
    let progress = goal_progress(conn, &category)?;

    prompter.line(format!(
        "Fitness progress for category '{category}' based on reps: {}",
        format_percent(progress.reps_percent)
    ))?;
    prompter.line(format!(
        "Fitness progress for category '{category}' based on sets: {}",
        format_percent(progress.sets_percent)
    ))
}
