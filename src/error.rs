//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by commands and by address book persistence.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field rejected its input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A command referenced a contact that is not in the book
    #[error("No contact named {0}")]
    NotFound(String),

    /// A command line carried too few positional arguments
    #[error("{command} expects {expected} argument(s), got {got}")]
    MissingArguments {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// No command alias matched the input line
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The saved address book exists but cannot be decoded
    #[error("Cannot read address book {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to encode the address book
    #[error("Cannot encode address book: {0}")]
    Encode(#[source] serde_json::Error),

    /// File system failure while loading or saving
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read from or write to the console
    #[error("Console I/O error: {0}")]
    Console(#[source] std::io::Error),
}

impl BookError {
    /// Whether the error comes from bad user input and should be answered
    /// with the generic retry message. Everything else is fatal.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::Validation(_) | Self::NotFound(_) | Self::MissingArguments { .. } => true,
            Self::UnknownCommand(_)
            | Self::Corrupt { .. }
            | Self::Encode(_)
            | Self::Io { .. }
            | Self::Console(_) => false,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
