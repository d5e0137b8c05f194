use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::error::{Result, TrackerError};

use super::helpers::{paint, parse_number, StatusKind};

/// Line-oriented terminal I/O. Generic over the streams so the menu can be
/// driven by stdin/stdout in the binary and by in-memory buffers in tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Print `label` without a newline and read one line. `None` means the
    /// input stream is exhausted.
    pub fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Prompter::read_line`], but running out of input is an error.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        self.read_line(label)?.ok_or_else(|| {
            TrackerError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
        })
    }

    /// Ask for a whole number; surrounding whitespace is ignored.
    pub fn ask_number(&mut self, label: &str, field: &'static str) -> Result<i64> {
        let raw = self.ask(label)?;
        parse_number(field, &raw)
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn info(&mut self, text: &str) -> Result<()> {
        let painted = paint(text, StatusKind::Info, self.color);
        self.line(painted)
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        let painted = paint(text, StatusKind::Error, self.color);
        self.line(painted)
    }

    /// Hand back the output stream, e.g. to inspect a test transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}
