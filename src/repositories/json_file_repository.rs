use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::snapshot::{self, BookSnapshot};
use crate::repositories::traits::BookRepository;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book repository backed by a JSON snapshot file.
///
/// Saves write a sibling `.tmp` file first and rename it over the target,
/// so the snapshot on disk is always either the old or the new one.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("addressbook"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot found, starting with an empty address book");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        let book = snapshot::parse_book(&contents)?;
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&BookSnapshot::from(book))?;

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| Self::io_error(&temp, e))?;
        debug!(path = %temp.display(), "Snapshot written");
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(Self::io_error(&self.path, e));
        }

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
