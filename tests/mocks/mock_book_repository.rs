use async_trait::async_trait;
use contact_book::error::{BookError, BookResult};
use contact_book::models::AddressBook;
use contact_book::repositories::BookRepository;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the saved snapshot as JSON text in memory so tests exercise the
/// same encoding as the file repository, and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    snapshot: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        let repo = Self::new();
        repo.set_snapshot(serde_json::to_string(book).unwrap());
        repo
    }

    /// Overwrite the stored snapshot with raw text.
    pub fn set_snapshot(&self, json: impl Into<String>) {
        *self.snapshot.lock().unwrap() = Some(json.into());
    }

    /// The stored snapshot, if anything was saved.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Decode the stored snapshot.
    pub fn saved_book(&self) -> Option<AddressBook> {
        self.snapshot()
            .map(|json| serde_json::from_str(&json).unwrap())
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn load(&self) -> BookResult<Option<AddressBook>> {
        self.track_call("load");

        match self.snapshot() {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|source| BookError::Corrupt {
                    path: PathBuf::from("<memory>"),
                    source,
                }),
        }
    }

    async fn save(&self, book: &AddressBook) -> BookResult<()> {
        self.track_call("save");

        let json = serde_json::to_string(book).map_err(BookError::Encode)?;
        self.set_snapshot(json);
        Ok(())
    }
}
