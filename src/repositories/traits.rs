use crate::error::BookResult;
use crate::models::AddressBook;
use async_trait::async_trait;

/// Repository for persisting the whole address book as one snapshot.
///
/// Provides abstraction over where the book lives, enabling different
/// implementations (JSON file, in-memory mock).
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Load the saved book, or `None` if nothing has been saved yet.
    ///
    /// A snapshot that exists but cannot be decoded is an error, never an
    /// empty book.
    async fn load(&self) -> BookResult<Option<AddressBook>>;

    /// Replace the saved snapshot with `book`.
    async fn save(&self, book: &AddressBook) -> BookResult<()>;

    /// Load the saved book, or start a fresh one if none exists.
    async fn load_or_new(&self) -> BookResult<AddressBook> {
        Ok(self.load().await?.unwrap_or_default())
    }
}
