//! Predefined categories and exercises inserted at startup. Both loaders skip
//! rows that are already present, so running them on every launch is safe.

use log::{debug, info};
use rusqlite::{params, Connection};

use crate::error::Result;

pub const SEED_CATEGORIES: [&str; 6] = [
    "Cardio",
    "Strength Training",
    "Flexibility",
    "Balance",
    "Core",
    "HIIT",
];

/// `(category, name, muscle_group, reps, sets)`
pub const SEED_EXERCISES: [(&str, &str, &str, i64, i64); 11] = [
    ("Cardio", "Running", "Legs", 30, 1),
    ("Cardio", "Cycling", "Legs", 45, 1),
    ("Cardio", "Jump Rope", "Full Body", 100, 3),
    ("Strength Training", "Push-ups", "Chest, Shoulders, Triceps", 15, 3),
    ("Strength Training", "Pull-ups", "Back, Biceps", 10, 3),
    ("Strength Training", "Squats", "Legs", 20, 3),
    ("Strength Training", "Deadlifts", "Full Body", 20, 3),
    // Stretching and balance work are not counted in reps or sets.
    ("Flexibility", "Stretching", "Full Body", 0, 0),
    ("Balance", "Single-leg Balance", "Legs, Core", 0, 0),
    ("Core", "Plank", "Core", 60, 1),
    ("Core", "Crunches", "Core", 20, 3),
];

/// Insert every seed category missing from the table. Existing names are read
/// once up front; returns how many rows were added.
pub fn seed_categories(conn: &Connection) -> Result<usize> {
    let mut stmt = conn.prepare("SELECT name FROM exercise_categories")?;
    let mut existing = stmt
        .query_map([], |row| row.get::<_, Option<String>>(0))?
        .filter_map(|name| name.transpose())
        .collect::<rusqlite::Result<Vec<String>>>()?;

    let mut inserted = 0;
    for category in SEED_CATEGORIES {
        if existing.iter().any(|name| name == category) {
            continue;
        }
        conn.execute(
            "INSERT INTO exercise_categories (name) VALUES (?1)",
            params![category],
        )?;
        existing.push(category.to_string());
        inserted += 1;
    }

    info!("seeded {inserted} categories");
    Ok(inserted)
}

/// Insert every seed exercise whose `(category, name)` pair is absent.
pub fn seed_exercises(conn: &Connection) -> Result<usize> {
    let mut inserted = 0;
    for (category, name, muscle_group, reps, sets) in SEED_EXERCISES {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM exercises WHERE category = ?1 AND name = ?2",
            params![category, name],
            |row| row.get(0),
        )?;
        if count > 0 {
            debug!("seed exercise {category}/{name} already present");
            continue;
        }

        conn.execute(
            "INSERT INTO exercises (category, name, muscle_group, reps, sets)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![category, name, muscle_group, reps, sets],
        )?;
        inserted += 1;
    }

    info!("seeded {inserted} exercises");
    Ok(inserted)
}

/// Run both loaders in startup order: exercises first, then categories.
pub fn seed_all(conn: &Connection) -> Result<()> {
    seed_exercises(conn)?;
    seed_categories(conn)?;
    Ok(())
}
