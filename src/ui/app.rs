use std::io::{BufRead, Write};

use log::{debug, warn};
use rusqlite::Connection;

use crate::error::{Result, TrackerError};

use super::actions;
use super::helpers::surface_error;
use super::prompt::Prompter;

/// Entries of the main menu, numbered 1 through 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCategory,
    ViewExercises,
    DeleteExercise,
    AddExercise,
    CreateRoutine,
    ViewRoutine,
    ExerciseProgress,
    SetGoals,
    GoalProgress,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AddCategory,
        MenuChoice::ViewExercises,
        MenuChoice::DeleteExercise,
        MenuChoice::AddExercise,
        MenuChoice::CreateRoutine,
        MenuChoice::ViewRoutine,
        MenuChoice::ExerciseProgress,
        MenuChoice::SetGoals,
        MenuChoice::GoalProgress,
        MenuChoice::Quit,
    ];

    /// Map the typed menu number to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddCategory => "Add exercise category",
            MenuChoice::ViewExercises => "View exercise by category",
            MenuChoice::DeleteExercise => "Delete exercise by category",
            MenuChoice::AddExercise => "Add new exercise",
            MenuChoice::CreateRoutine => "Create Workout Routine",
            MenuChoice::ViewRoutine => "View Workout Routine",
            MenuChoice::ExerciseProgress => "View Exercise Progress",
            MenuChoice::SetGoals => "Set Fitness Goals",
            MenuChoice::GoalProgress => "View Progress towards Fitness Goals",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// The menu controller. Owns the store connection for the whole session and
/// releases it when the user quits or input runs out.
pub struct App<R, W> {
    conn: Connection,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(conn: Connection, prompter: Prompter<R, W>) -> Self {
        Self { conn, prompter }
    }

    /// Show the menu and dispatch choices until Quit. Returns the output
    /// stream once the connection has been closed.
    pub fn run(mut self) -> Result<W> {
        loop {
            self.show_menu()?;
            let Some(input) = self.prompter.read_line("Enter your choice: ")? else {
                debug!("input closed, leaving menu");
                break;
            };

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Quit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => self.prompter.error("Invalid choice. Please try again.")?,
            }
        }

        let Self { conn, mut prompter } = self;
        conn.close().map_err(|(_, err)| TrackerError::Storage(err))?;
        prompter.line("Exiting program.")?;
        Ok(prompter.into_output())
    }

    /// Run one menu action. Its failure is printed and swallowed so the menu
    /// keeps going; only a broken output stream ends the session.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        debug!("menu choice: {}", choice.label());
        let conn = &self.conn;
        let prompter = &mut self.prompter;

        let outcome = match choice {
            MenuChoice::AddCategory => actions::add_exercise_category(conn, prompter),
            MenuChoice::ViewExercises => actions::view_exercises_by_category(conn, prompter),
            MenuChoice::DeleteExercise => actions::delete_exercise(conn, prompter),
            MenuChoice::AddExercise => actions::add_new_exercise(conn, prompter),
            MenuChoice::CreateRoutine => actions::create_workout_routine(conn, prompter),
            MenuChoice::ViewRoutine => actions::view_workout_routine(conn, prompter),
            MenuChoice::ExerciseProgress => actions::view_exercise_progress(conn, prompter),
            MenuChoice::SetGoals => actions::set_fitness_goals(conn, prompter),
            MenuChoice::GoalProgress => {
                actions::view_progress_towards_fitness_goals(conn, prompter)
            }
            MenuChoice::Quit => Ok(()),
        };

        if let Err(err) = outcome {
            warn!("{} failed: {err}", choice.label());
            self.prompter.error(&surface_error(&err))?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        self.prompter.line("\nFitness Tracker Menu:")?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            self.prompter.line(format!("{}. {}", index + 1, choice.label()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::db::{
        ensure_schema_at, fetch_categories, fetch_exercises_by_category, fetch_goals,
        fetch_workouts, seed_all,
    };

    /// Feed `script` to a freshly seeded store. Returns the transcript and the
    /// store location so tests can reopen it afterwards.
    fn run_script(script: &str) -> (String, TempDir, PathBuf) {
        run_script_after(|_| {}, script)
    }

    /// Like [`run_script`], with extra rows written before the menu starts.
    fn run_script_after(
        setup: impl FnOnce(&Connection),
        script: &str,
    ) -> (String, TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("tracker.db");
        let conn = ensure_schema_at(&db_path).unwrap();
        seed_all(&conn).unwrap();
        setup(&conn);

        let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), false);
        let output = App::new(conn, prompter).run().unwrap();
        (String::from_utf8(output).unwrap(), temp_dir, db_path)
    }

    #[test]
    fn parses_menu_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddCategory));
        assert_eq!(MenuChoice::parse(" 10 "), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("11"), None);
        assert_eq!(MenuChoice::parse("quit"), None);
    }

    #[test]
    fn quit_closes_and_says_goodbye() {
        let (transcript, _dir, _) = run_script("10\n");
        assert!(transcript.contains("Fitness Tracker Menu:"));
        assert!(transcript.contains("10. Quit"));
        assert!(transcript.trim_end().ends_with("Exiting program."));
    }

    #[test]
    fn invalid_choice_redraws_menu() {
        let (transcript, _dir, _) = run_script("42\n10\n");
        assert!(transcript.contains("Invalid choice. Please try again."));
        assert_eq!(transcript.matches("Fitness Tracker Menu:").count(), 2);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (transcript, _dir, _) = run_script("");
        assert!(transcript.contains("Exiting program."));
    }

    #[test]
    fn viewing_cardio_lists_seeds_then_adds_exercise() {
        let (transcript, _dir, db_path) =
            run_script("2\nCardio\nCardio\nRowing\nBack\n50\n2\n10\n");

        let running = transcript.find("Running").unwrap();
        let cycling = transcript.find("Cycling").unwrap();
        let jump_rope = transcript.find("Jump Rope").unwrap();
        let add_prompt = transcript.find("Enter exercise name: ").unwrap();
        assert!(running < cycling && cycling < jump_rope && jump_rope < add_prompt);
        assert!(transcript.contains("Exercise added successfully."));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert_eq!(fetch_exercises_by_category(&conn, "Cardio").unwrap().len(), 4);
    }

    #[test]
    fn bare_exercise_rows_do_not_break_listings() {
        let (transcript, _dir, _) = run_script_after(
            |conn| {
                conn.execute("INSERT INTO exercises (category) VALUES ('Cardio')", [])
                    .unwrap();
            },
            "6\nCardio\n5\nCardio\n4\n10\n",
        );
        assert!(transcript.contains("- Jump Rope\n- (unnamed)\n"));
        assert!(transcript.contains("4. (unnamed)"));
        assert!(!transcript.contains("An error occurred"));
    }

    #[test]
    fn unregistered_category_accepts_exercises_and_goals() {
        let (transcript, _dir, db_path) =
            run_script("4\nYoga\nTree Pose\nLegs\n1\n1\n8\nYoga\n2\n2\n9\nYoga\n10\n");
        assert!(transcript.contains("Exercise added successfully."));
        assert!(transcript.contains("Fitness goals set successfully."));
        assert!(transcript.contains("Fitness progress for category 'Yoga' based on reps: 50.00%"));
        assert!(!transcript.contains("An error occurred"));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert_eq!(fetch_exercises_by_category(&conn, "Yoga").unwrap().len(), 1);
    }

    #[test]
    fn viewing_empty_category_returns_to_menu() {
        let (transcript, _dir, _) = run_script("2\nPilates\n10\n");
        assert!(transcript.contains("No exercises found in this category."));
        assert!(!transcript.contains("Enter exercise name: "));
    }

    #[test]
    fn non_numeric_reps_are_reported_not_fatal() {
        let (transcript, _dir, db_path) = run_script("4\nCore\nSit-ups\nCore\nlots\n10\n");
        assert!(transcript.contains("An error occurred: invalid reps: 'lots'"));
        assert!(transcript.contains("Exiting program."));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert_eq!(fetch_exercises_by_category(&conn, "Core").unwrap().len(), 2);
    }

    #[test]
    fn delete_exercise_by_category_fails_gracefully() {
        let (transcript, _dir, db_path) = run_script("3\nRunning\n3\nCardio\n10\n");
        assert!(transcript.contains("An error occurred: database error"));
        assert!(transcript.contains("category_id"));
        assert!(transcript.contains("Category 'Cardio' does not exist."));
        assert!(transcript.contains("Exiting program."));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert_eq!(fetch_exercises_by_category(&conn, "Cardio").unwrap().len(), 3);
    }

    #[test]
    fn adding_a_duplicate_category_is_reported() {
        let (transcript, _dir, _) = run_script("1\nCardio\n10\n");
        assert!(transcript.contains("An error occurred: category 'Cardio' already exists"));
        assert!(!transcript.contains("Additional actions:"));
    }

    #[test]
    fn category_follow_up_delete_uses_new_category() {
        let (transcript, _dir, db_path) = run_script("1\nYoga\n2\n3\n10\n");
        assert!(transcript.contains("Exercise category added successfully."));
        assert!(transcript.contains("Exercise category 'Yoga' deleted successfully."));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert!(fetch_categories(&conn)
            .unwrap()
            .iter()
            .any(|category| category.name == "Yoga"));
    }

    #[test]
    fn category_follow_up_update_asks_for_old_name_again() {
        // The follow-up menu was opened for "Yoga", but the rename applies to
        // whatever old name is typed at the update prompt.
        let (transcript, _dir, db_path) = run_script("1\nYoga\n1\nCardio\nEndurance\n3\n10\n");
        assert!(transcript.contains("Enter old workout category: "));
        assert!(transcript.contains("Workout category updated successfully."));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert!(fetch_exercises_by_category(&conn, "Cardio").unwrap().is_empty());
        assert_eq!(fetch_exercises_by_category(&conn, "Endurance").unwrap().len(), 3);
    }

    #[test]
    fn follow_up_menu_rejects_unknown_choice() {
        let (transcript, _dir, _) = run_script("1\nYoga\n9\n3\n10\n");
        assert_eq!(transcript.matches("Additional actions:").count(), 2);
        assert!(transcript.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn routine_is_printed_and_logged() {
        let (transcript, _dir, db_path) = run_script("5\nStrength Training\n4, 2, 9\n10\n");
        assert!(transcript.contains("1. Push-ups"));
        assert!(transcript.contains("Workout routine for Category 'Strength Training':"));
        let deadlifts = transcript.find("- Deadlifts").unwrap();
        let pull_ups = transcript.find("- Pull-ups").unwrap();
        assert!(deadlifts < pull_ups);
        assert!(transcript.contains("Logged 2 exercises for"));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert_eq!(fetch_workouts(&conn).unwrap().len(), 2);
    }

    #[test]
    fn routine_with_bad_selection_logs_nothing() {
        let (transcript, _dir, db_path) = run_script("5\nCardio\n1,x\n10\n");
        assert!(transcript.contains("An error occurred: invalid exercise number: 'x'"));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert!(fetch_workouts(&conn).unwrap().is_empty());
    }

    #[test]
    fn view_routine_lists_names() {
        let (transcript, _dir, _) = run_script("6\nCore\n6\nPilates\n10\n");
        assert!(transcript.contains("Workout Routine for Category 'Core':\n- Plank\n- Crunches\n"));
        assert!(transcript.contains("No exercises found in this category."));
    }

    #[test]
    fn goal_then_exercise_progress() {
        let (transcript, _dir, db_path) = run_script("8\nCore\n100\n5\n7\nCore\nCrunches\n10\n");
        assert!(transcript.contains("Fitness goals set successfully."));
        assert!(transcript
            .contains("Exercise progress for category 'Core' based on reps: 20.00%"));
        assert!(transcript
            .contains("Exercise progress for category 'Core' based on sets: 60.00%"));

        let conn = ensure_schema_at(&db_path).unwrap();
        assert_eq!(fetch_goals(&conn, "Core").unwrap().len(), 1);
    }

    #[test]
    fn category_progress_with_zero_set_goal() {
        let (transcript, _dir, _) = run_script("8\nCardio\n350\n0\n9\nCardio\n10\n");
        assert!(transcript.contains("Fitness progress for category 'Cardio' based on reps: 50.00%"));
        assert!(transcript.contains("Fitness progress for category 'Cardio' based on sets: 0.00%"));
    }

    #[test]
    fn progress_without_goal_is_reported() {
        let (transcript, _dir, _) = run_script("9\nHIIT\n7\nCore\nPlank\n10\n");
        assert_eq!(
            transcript
                .matches("An error occurred: no goals found for category")
                .count(),
            2
        );
    }
}
