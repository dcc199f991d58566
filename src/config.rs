//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_PAGE_SIZE;
use std::env;
use std::path::PathBuf;

/// Default location of the saved address book.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is loaded from and saved to
    pub book_path: PathBuf,

    /// Records per page when listing the book (default: 2)
    pub page_size: usize,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: saved address book file (default: `address_book.json`)
    /// - `ADDRESS_BOOK_PAGE_SIZE`: records per page, at least 1 (default: 2)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let book_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "warn".to_string(),
        }
    }
}
