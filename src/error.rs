//! Failure taxonomy shared by the persistence layer and the menu flows.
//!
//! Every repository call returns [`Result`], so the menu can print a short
//! diagnostic and carry on while tests match on the exact failure class.

use thiserror::Error;

/// Errors surfaced by store access, input parsing, and progress lookups.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Any SQLite failure: bad SQL, missing columns, constraint violations.
    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Reading from stdin or writing to stdout failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Text typed where an integer was expected.
    #[error("invalid {field}: '{input}' is not a whole number")]
    InvalidNumber { field: &'static str, input: String },

    /// `exercise_categories.name` is unique.
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("{0} not found")]
    NotFound(String),

    /// More than one exercise row matched a lookup that needs exactly one.
    #[error("{count} exercises named '{name}' in category '{category}'")]
    AmbiguousExercise {
        category: String,
        name: String,
        count: usize,
    },

    #[error("no goals found for category '{0}'")]
    MissingGoal(String),

    /// The store location could not be resolved.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias for results with [`TrackerError`].
pub type Result<T> = std::result::Result<T, TrackerError>;
