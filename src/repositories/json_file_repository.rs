use crate::error::{BookError, BookResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book repository backed by a single JSON file.
///
/// Saves go to a sibling temporary file which is then renamed over the
/// target, so an interrupted save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> BookError {
        BookError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl BookRepository for JsonFileRepository {
    async fn load(&self) -> BookResult<Option<AddressBook>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No saved address book at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook =
            serde_json::from_slice(&bytes).map_err(|source| BookError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "Loaded {} contact(s) from {}",
            book.len(),
            self.path.display()
        );
        Ok(Some(book))
    }

    async fn save(&self, book: &AddressBook) -> BookResult<()> {
        let json = serde_json::to_vec_pretty(book).map_err(BookError::Encode)?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        info!("Saved {} contact(s) to {}", book.len(), self.path.display());
        Ok(())
    }
}
