//! Text menu front end: a line prompter, one flow per menu action, and the
//! controller loop that ties them to the store.

mod actions;
mod app;
mod helpers;
mod prompt;

pub use app::{App, MenuChoice};
pub use prompt::Prompter;
