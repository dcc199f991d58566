//! Contact Book - a console address book with validated contact fields.
//!
//! Contacts hold a name, any number of phone numbers and an optional
//! birthday. The whole book is restored from disk at startup and saved
//! back when the user exits.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects and date helpers
//! - **models**: Records and the address book that owns them
//! - **repositories**: Persistence of the address book snapshot
//! - **commands**: Alias routing, handlers and error translation
//! - **console**: Session state and the read-line loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use commands::{dispatch, Command, CommandRouter, Outcome};
pub use config::Config;
pub use console::Session;
pub use domain::{BirthdayField, Field, NameField, PhoneField, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddressBook, Record};
pub use repositories::{BookRepository, JsonFileRepository};
