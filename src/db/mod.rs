//! Persistence module split across logical submodules. Every function takes
//! the connection explicitly and issues one purpose-built query.

mod categories;
mod connection;
mod exercises;
mod goals;
mod progress;
mod seed;
mod workouts;

pub use categories::{create_category, delete_category, fetch_categories, rename_category};
pub use connection::{ensure_schema_at, open_in_memory};
pub use exercises::{
    create_exercise, delete_exercise_by_category, fetch_exercises_by_category,
    fetch_exercises_named,
};
pub use goals::{create_goal, fetch_goals};
pub use progress::{exercise_progress, goal_progress, percentage};
pub use seed::{seed_all, seed_categories, seed_exercises, SEED_CATEGORIES, SEED_EXERCISES};
pub use workouts::{fetch_workouts, log_routine, select_routine};
