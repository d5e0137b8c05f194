use crossterm::style::Stylize;

use crate::error::{Result, TrackerError};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

/// Color a status line green or red. Plain text when color is off.
pub(crate) fn paint(text: &str, kind: StatusKind, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match kind {
        StatusKind::Info => text.green().to_string(),
        StatusKind::Error => text.red().to_string(),
    }
}

/// Parse user input as a whole number.
pub(crate) fn parse_number(field: &'static str, raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| TrackerError::InvalidNumber {
        field,
        input: trimmed.to_string(),
    })
}

/// Two decimals followed by a percent sign.
pub(crate) fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// The line printed when an operation fails and control returns to the menu.
pub(crate) fn surface_error(err: &TrackerError) -> String {
    format!("An error occurred: {err}")
}
