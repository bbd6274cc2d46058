use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::snapshot::{self, BookSnapshot};
use crate::repositories::traits::BookRepository;
use std::cell::RefCell;

/// Address book repository that keeps the serialized snapshot in memory.
///
/// Snapshots still go through JSON so tests exercise the real format.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    snapshot: RefCell<Option<String>>,
    saves: RefCell<usize>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot document.
    pub fn with_snapshot(json: impl Into<String>) -> Self {
        Self {
            snapshot: RefCell::new(Some(json.into())),
            saves: RefCell::new(0),
        }
    }

    /// The last saved snapshot document, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.borrow().clone()
    }

    /// Number of times `save` succeeded.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl BookRepository for InMemoryRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        match self.snapshot.borrow().as_deref() {
            Some(json) => snapshot::parse_book(json),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string(&BookSnapshot::from(book))?;
        *self.snapshot.borrow_mut() = Some(json);
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
