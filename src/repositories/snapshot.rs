//! Versioned on-disk representation of the address book.
//!
//! ```json
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "John", "phones": ["1234567890"], "birthday": "12.06.1990" }
//!   ]
//! }
//! ```

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One contact as stored in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSnapshot {
    pub name: ContactName,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

/// The whole address book as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookSnapshot {
    pub version: u32,
    #[serde(default)]
    pub contacts: Vec<ContactSnapshot>,
}

/// Just the version field, read before the rest of the document.
#[derive(Debug, Deserialize)]
struct SnapshotHeader {
    version: u32,
}

/// Parse a snapshot document into an address book.
///
/// The version is checked before the contacts are parsed, so a document
/// written by a newer format reports `UnsupportedVersion` even when its
/// layout no longer matches.
pub fn parse_book(json: &str) -> StorageResult<AddressBook> {
    let header: SnapshotHeader = serde_json::from_str(json)?;
    check_version(header.version)?;

    let snapshot: BookSnapshot = serde_json::from_str(json)?;
    snapshot.into_book()
}

fn check_version(found: u32) -> StorageResult<()> {
    if found == SNAPSHOT_VERSION {
        Ok(())
    } else {
        Err(StorageError::UnsupportedVersion {
            found,
            expected: SNAPSHOT_VERSION,
        })
    }
}

impl From<&Record> for ContactSnapshot {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().clone(),
            phones: record.phones().to_vec(),
            birthday: record.birthday().copied(),
        }
    }
}

impl From<&AddressBook> for BookSnapshot {
    fn from(book: &AddressBook) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts: book.iter().map(ContactSnapshot::from).collect(),
        }
    }
}

impl BookSnapshot {
    /// Rebuild the address book, checking the invariants serde cannot.
    ///
    /// # Errors
    ///
    /// - `StorageError::UnsupportedVersion` for a version other than `SNAPSHOT_VERSION`
    /// - `StorageError::Corrupt` for a repeated name or a repeated phone
    pub fn into_book(self) -> StorageResult<AddressBook> {
        check_version(self.version)?;

        let mut book = AddressBook::new();
        for contact in self.contacts {
            if book.contains(contact.name.as_str()) {
                return Err(StorageError::Corrupt(format!(
                    "contact {} appears more than once",
                    contact.name
                )));
            }
            let name = contact.name.clone();
            let record = Record::from_parts(contact.name, contact.phones, contact.birthday)
                .map_err(|e| StorageError::Corrupt(format!("contact {}: {}", name, e)))?;
            book.add_record(record);
        }
        Ok(book)
    }
}
