//! Contact Book - Main entry point
//!
//! Restores the address book, then reads commands from stdin until the
//! user exits. Logs go to stderr so stdout carries only the conversation.

use anyhow::{Context, Result};
use contact_book::repositories::{BookRepository, JsonFileRepository};
use contact_book::{console, Config, Session};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration comes first so LOG_LEVEL can seed the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository =
        Arc::new(JsonFileRepository::new(config.book_path.clone())) as Arc<dyn BookRepository>;

    // A book that exists but cannot be read must stop us before any command
    // runs, or the next save would overwrite it.
    let mut session = match Session::open(repository, config.page_size).await {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to restore address book: {}", e);
            return Err(e).with_context(|| {
                format!(
                    "Refusing to start: {} could not be restored",
                    config.book_path.display()
                )
            });
        }
    };

    let stdin = BufReader::new(tokio::io::stdin());
    console::run(&mut session, stdin, tokio::io::stdout())
        .await
        .context("Console session failed")?;

    info!("Contact book shutdown complete");
    Ok(())
}
