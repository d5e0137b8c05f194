//! Core library surface for the fitness tracker.
//!
//! The crate is layered the same way top to bottom: `db` opens and seeds the
//! SQLite store and holds one function per query, `models` carries the rows
//! those functions return, and `ui` turns a numbered text menu into calls on
//! `db`. Every repository function takes the `Connection` explicitly and
//! returns a [`TrackerError`] on failure, so the menu can report a problem and
//! keep going while tests match on the exact failure.
//!
//! The `bin` target only wires these pieces together with `config` and
//! `logging`; tests and any other front end can reuse the repository
//! functions directly.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

/// Convenience re-exports for the persistence layer used at startup.
pub use db::{ensure_schema_at, open_in_memory, seed_all};

pub use error::{Result, TrackerError};
pub use models::{Category, Exercise, Goal, NewExercise, Progress, WorkoutEntry};

/// The menu controller and its terminal I/O.
pub use ui::{App, MenuChoice, Prompter};
