//! Interactive chat mode for translation sessions.
//!
//! A REPL that translates each line it reads, with slash commands for
//! switching language and model.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, SessionConfig};
