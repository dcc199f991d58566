//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The birthday text is not shaped `DD.MM.YYYY`.
    InvalidBirthday(String),

    /// The birthday text has the right shape but names no calendar date.
    InvalidDate(String),

    /// A persisted phone number fails the phone format rule.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBirthday(text) => {
                write!(f, "Invalid birthday (expected DD.MM.YYYY): {}", text)
            }
            Self::InvalidDate(text) => write!(f, "Not a calendar date: {}", text),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
