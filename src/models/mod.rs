//! Data models for the address book.
//!
//! This module contains the contact record and the name-keyed address book
//! that owns all records.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, BirthdayLookup, UpcomingBirthday};
pub use record::Record;
