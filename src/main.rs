//! Binary entry point: open the store, seed it, and run the text menu until
//! the user quits.
use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use fitness_tracker::config::Args;
use fitness_tracker::logging::init_logger;
use fitness_tracker::{ensure_schema_at, seed_all, App, Prompter};
use log::{info, warn};

/// Failing to open the store ends the session before the menu is shown.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level()).context("failed to install logger")?;

    let db_path = args.db_path()?;
    let conn = ensure_schema_at(&db_path)
        .with_context(|| format!("Database connection failed: {}", db_path.display()))?;
    if let Err(err) = seed_all(&conn) {
        warn!("seeding failed: {err}");
        println!("An error occurred: {err}");
    }
    info!("using store at {}", db_path.display());

    let color = !args.no_color && io::stdout().is_terminal();
    let prompter = Prompter::new(io::stdin().lock(), io::stdout(), color);
    App::new(conn, prompter).run()?;
    Ok(())
}
