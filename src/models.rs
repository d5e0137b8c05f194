//! Domain models that mirror the SQLite schema. They stay plain data holders
//! so the `db` module owns every query and the `ui` module owns every prompt.
//!
//! Apart from primary keys, every column in the schema is nullable and
//! nothing validates rows written by other tools, so the fields that can come
//! back empty are modelled as `Option`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A named grouping of exercises such as `Cardio`.
pub struct Category {
    /// Primary key from the `exercise_categories` table.
    pub id: i64,
    /// Unique display name. Exercises and goals refer to the category by this
    /// text rather than by id.
    pub name: String,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A stored exercise row. `category` is a text copy of the category name,
/// not an enforced key, so it may point at a category that no longer exists.
pub struct Exercise {
    /// Primary key; workout log entries point back at it.
    pub id: i64,
    /// Category name the row is filed under. Rows are always fetched by
    /// category, so this is never empty in practice.
    pub category: String,
    /// Movement name, e.g. `Push-ups`.
    pub name: Option<String>,
    /// Free-form description of the muscles worked.
    pub muscle_group: Option<String>,
    /// Default repetitions per set.
    pub reps: Option<i64>,
    /// Default number of sets.
    pub sets: Option<i64>,
}

impl Exercise {
    /// Name for listings, with a placeholder for rows stored without one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

/// Render an optional count, using `-` for missing values.
fn count_or_dash(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |count| count.to_string())
}

impl fmt::Display for Exercise {
    /// One line per row, used by the "view exercises" listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} [{}] {} ({}) - {} reps x {} sets",
            self.id,
            self.category,
            self.display_name(),
            self.muscle_group.as_deref().unwrap_or("-"),
            count_or_dash(self.reps),
            count_or_dash(self.sets)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Field values for an exercise that has not been inserted yet. Input from
/// the menu always supplies every field.
pub struct NewExercise {
    pub category: String,
    pub name: String,
    pub muscle_group: String,
    pub reps: i64,
    pub sets: i64,
}

impl NewExercise {
    pub fn new(category: &str, name: &str, muscle_group: &str, reps: i64, sets: i64) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            reps,
            sets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A user-declared target for a category. Nothing stops a category from
/// collecting several of these.
pub struct Goal {
    /// Primary key; the lowest id is the goal used for single-exercise
    /// progress.
    pub id: i64,
    /// Category name the goal applies to. Not checked against the category
    /// table.
    pub category: String,
    /// Target repetitions.
    pub goal_reps: i64,
    /// Target sets.
    pub goal_sets: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One exercise recorded as part of a workout routine on a given day.
pub struct WorkoutEntry {
    pub id: i64,
    /// The exercise this entry logs.
    pub exercise_id: i64,
    /// Reps copied from the exercise at logging time; empty when the exercise
    /// had none.
    pub reps: Option<i64>,
    /// Sets copied from the exercise at logging time.
    pub sets: Option<i64>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Completion percentages for the reps and sets dimensions.
pub struct Progress {
    /// Completed reps as a percentage of the goal; `0.0` for a zero goal.
    pub reps_percent: f64,
    /// Completed sets as a percentage of the goal; `0.0` for a zero goal.
    pub sets_percent: f64,
}
