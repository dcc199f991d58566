//! Application state for one console session.

use crate::commands::{dispatch, CommandRouter, Outcome, UNKNOWN_COMMAND_MESSAGE};
use crate::error::{BookError, BookResult};
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use std::sync::Arc;
use tracing::{info, warn};

/// The address book plus everything needed to run commands against it.
///
/// Created once at startup from the repository (load-or-new), mutated by
/// each command, and saved back when the exit command runs.
pub struct Session {
    book: AddressBook,
    repository: Arc<dyn BookRepository>,
    router: CommandRouter,
    page_size: usize,
}

impl Session {
    /// Open a session, restoring the saved book or starting an empty one.
    ///
    /// # Errors
    ///
    /// Fails if a saved book exists but cannot be read or decoded.
    pub async fn open(repository: Arc<dyn BookRepository>, page_size: usize) -> BookResult<Self> {
        let book = repository.load_or_new().await?;
        info!("Session opened with {} contact(s)", book.len());
        Ok(Self {
            book,
            repository,
            router: CommandRouter::default(),
            page_size,
        })
    }

    /// Replace the default alias table.
    pub fn with_router(mut self, router: CommandRouter) -> Self {
        self.router = router;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Route and run one input line.
    ///
    /// Unknown commands and input errors come back as replies. An exit
    /// command saves the book before returning [`Outcome::Exit`].
    ///
    /// # Errors
    ///
    /// Only fatal errors, such as a failed save, are returned.
    pub async fn execute(&mut self, line: &str) -> BookResult<Outcome> {
        let parsed = match self.router.parse(line) {
            Ok(parsed) => parsed,
            Err(BookError::UnknownCommand(input)) => {
                warn!("Unknown command: {:?}", input);
                return Ok(Outcome::Reply(UNKNOWN_COMMAND_MESSAGE.to_string()));
            }
            Err(e) => return Err(e),
        };

        let outcome = dispatch(&mut self.book, parsed.command, &parsed.args, self.page_size)?;
        if outcome.is_exit() {
            self.repository.save(&self.book).await?;
        }
        Ok(outcome)
    }
}
