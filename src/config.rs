//! Command-line arguments and store location resolution.

use std::path::PathBuf;

use clap::Parser;
use directories::BaseDirs;
use log::LevelFilter;

use crate::error::{Result, TrackerError};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".fitness-tracker";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "fitness_tracker.db";

#[derive(Parser, Debug)]
#[command(version, about = "Menu-driven fitness tracker", long_about = None)]
pub struct Args {
    /// Path to the SQLite store (defaults to ~/.fitness-tracker/fitness_tracker.db).
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored status lines.
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Resolve the store path, preferring the explicit `--db` flag.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db {
            Some(path) => Ok(path.clone()),
            None => default_db_path(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Resolve the absolute path to the SQLite database inside the user's home.
pub fn default_db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| TrackerError::Config("could not locate home directory".to_string()))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
