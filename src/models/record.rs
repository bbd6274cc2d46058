//! Contact record: a name with its phone numbers and optional birthday.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{BookError, BookResult};
use std::fmt;
use tracing::debug;

/// A single contact in the address book.
///
/// The name is fixed once the record exists. Phones keep their insertion
/// order for display and never contain the same number twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record, validating the name.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Rebuild a record from stored parts, enforcing phone uniqueness.
    pub fn from_parts(
        name: ContactName,
        phones: Vec<Phone>,
        birthday: Option<Birthday>,
    ) -> BookResult<Self> {
        let mut record = Self::with_name(name);
        for phone in phones {
            record.push_unique(phone)?;
        }
        record.birthday = birthday;
        Ok(record)
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `raw` is not a ten-digit number
    /// - `BookError::DuplicatePhone` if the record already has it
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        self.push_unique(phone)?;
        debug!(contact = %self.name, phone = raw, "Phone added");
        Ok(())
    }

    fn push_unique(&mut self, phone: Phone) -> BookResult<()> {
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone(phone.into_inner()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number. Returns whether anything was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p != raw);
        let removed = self.phones.len() != before;
        if removed {
            debug!(contact = %self.name, phone = raw, "Phone removed");
        }
        removed
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if the record has no phone equal to `old`
    /// - `BookError::Validation` if `new` is not a ten-digit number
    /// - `BookError::DuplicatePhone` if another entry already holds `new`
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| BookError::phone_not_found(old))?;

        let replacement = Phone::new(new)?;
        let clashes = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && *p == replacement);
        if clashes {
            return Err(BookError::DuplicatePhone(replacement.into_inner()));
        }

        self.phones[index] = replacement;
        debug!(contact = %self.name, old, new, "Phone edited");
        Ok(())
    }

    /// Look up a phone number on this record.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == raw)
    }

    /// Set the birthday, replacing any previous one.
    ///
    /// Returns the birthday that was replaced, if there was one.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<Option<Birthday>> {
        let birthday = Birthday::new(raw)?;
        debug!(contact = %self.name, birthday = raw, "Birthday set");
        Ok(self.birthday.replace(birthday))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "None"),
        }
    }
}
