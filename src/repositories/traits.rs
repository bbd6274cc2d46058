use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// The whole book is loaded once at startup and saved as a single snapshot,
/// so implementations never deal with partial updates.
pub trait BookRepository {
    /// Load the stored address book.
    ///
    /// A store that has never been written yields an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
