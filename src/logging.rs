//! Logger setup for the binary. Library code only talks to the `log` facade,
//! so tests run without any logger installed.

use std::io::Write;

use log::{LevelFilter, SetLoggerError};

/// Install the global logger. `RUST_LOG` takes precedence over `level` when it
/// is set. Records go to stderr so they never interleave with the menu.
///
/// Fails if a global logger has already been installed.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(move |buf, record| {
            writeln!(
                buf,
                "{}: {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .filter_level(level)
        .parse_env("RUST_LOG");

    builder.try_init()
}
