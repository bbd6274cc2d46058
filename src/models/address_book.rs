//! The address book: contact records keyed by name.

use super::record::Record;
use crate::calendar;
use crate::domain::{Birthday, ContactName};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use indexmap::{map, IndexMap};
use std::fmt;
use tracing::debug;

/// Result of asking for a contact's birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayLookup {
    /// The contact has a stored birthday
    Known(Birthday),
    /// The contact exists but no birthday was recorded
    NotSpecified,
}

/// A contact to congratulate and the (weekend-adjusted) day to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.date.format(crate::domain::BIRTHDAY_FORMAT)
        )
    }
}

/// Name-keyed collection of contact records.
///
/// Every key equals the name of the record stored under it. Iteration follows
/// insertion order; replacing a record keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<ContactName, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, replacing any record with that name.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        debug!(contact = %record.name(), "Record stored");
        self.records.insert(record.name().clone(), record)
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Look up a record that must exist.
    pub fn require_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.find_mut(name)
            .ok_or_else(|| BookError::contact_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove a record by name. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!(contact = name, "Record deleted");
        }
        removed
    }

    /// The stored birthday of `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if there is no such contact.
    pub fn birthday_for(&self, name: &str) -> BookResult<BirthdayLookup> {
        let record = self
            .find(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;

        Ok(match record.birthday() {
            Some(birthday) => BirthdayLookup::Known(*birthday),
            None => BirthdayLookup::NotSpecified,
        })
    }

    /// Contacts whose birthday falls within `window_days` of `today`.
    ///
    /// Each birthday's next anniversary on or after `today` is kept when it is
    /// at most `window_days` away. Weekend dates are moved to the following
    /// Monday. Results follow the book's iteration order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            if let Some(date) = calendar::celebration_within(birthday, today, window_days) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().clone(),
                    date,
                });
            }
        }

        debug!(
            %today,
            window_days,
            found = upcoming.len(),
            "Upcoming birthdays computed"
        );
        upcoming
    }

    /// Records in iteration order.
    pub fn iter(&self) -> map::Values<'_, ContactName, Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = map::Values<'a, ContactName, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for record in self.records.values() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
            first = false;
        }
        Ok(())
    }
}
