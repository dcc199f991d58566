//! Console commands.
//!
//! The [`CommandRouter`] turns a line of text into a [`Command`] plus
//! positional arguments; [`dispatch`] runs the matching handler against the
//! address book and answers every input error with one generic message.

pub mod handlers;
pub mod router;

pub use handlers::{dispatch, Outcome, INPUT_ERROR_MESSAGE, UNKNOWN_COMMAND_MESSAGE};
pub use router::{Command, CommandRouter, ParsedCommand, DEFAULT_ALIASES};
