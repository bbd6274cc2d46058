//! Contact service layer.
//!
//! Business operations behind each shell command. Every operation either
//! commits fully or leaves the address book untouched.

use crate::calendar::{Clock, SystemClock, DEFAULT_WINDOW_DAYS};
use crate::domain::{ContactName, Phone};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, BirthdayLookup, Record, UpcomingBirthday};
use tracing::{debug, info};

/// Whether an operation created something new or changed something existing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added,
    Updated,
}

/// Contact service trait for business operations.
pub trait ContactService {
    /// Create the contact if needed, then add `phone` to it when given.
    fn add_contact(&mut self, name: &str, phone: Option<&str>) -> BookResult<Change>;

    /// Replace one phone number of an existing contact.
    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()>;

    /// Remove one phone number of an existing contact.
    ///
    /// Returns whether the number was present.
    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<bool>;

    /// Delete an existing contact.
    fn delete_contact(&mut self, name: &str) -> BookResult<Record>;

    /// All phone numbers of an existing contact.
    fn phones(&self, name: &str) -> BookResult<Vec<Phone>>;

    /// Set the birthday of an existing contact.
    fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<Change>;

    /// The birthday of an existing contact.
    fn show_birthday(&self, name: &str) -> BookResult<BirthdayLookup>;

    /// Birthdays within `window_days` of today, or the default window when `None`.
    fn upcoming_birthdays(&self, window_days: Option<u32>) -> Vec<UpcomingBirthday>;

    /// Read access to the whole address book.
    fn book(&self) -> &AddressBook;
}

/// Default implementation of ContactService, owning the address book.
pub struct ContactServiceImpl {
    book: AddressBook,
    clock: Box<dyn Clock>,
    default_window_days: u32,
}

impl ContactServiceImpl {
    /// Create a new contact service over `book`, using the system clock.
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            clock: Box::new(SystemClock),
            default_window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Use `clock` as the source of "today".
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Window used by `upcoming_birthdays(None)`.
    pub fn with_default_window(mut self, days: u32) -> Self {
        self.default_window_days = days;
        self
    }

    /// Hand the address book back, e.g. for saving.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    fn require(&self, name: &str) -> BookResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::contact_not_found(name))
    }
}

impl ContactService for ContactServiceImpl {
    fn add_contact(&mut self, name: &str, phone: Option<&str>) -> BookResult<Change> {
        if let Some(record) = self.book.find_mut(name) {
            if let Some(phone) = phone {
                record.add_phone(phone)?;
            }
            return Ok(Change::Updated);
        }

        // Build the whole record before inserting so a bad phone adds nothing.
        let mut record = Record::with_name(ContactName::new(name)?);
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        self.book.add_record(record);
        info!(contact = name, "Contact added");
        Ok(Change::Added)
    }

    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        self.book.require_mut(name)?.edit_phone(old, new)
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<bool> {
        Ok(self.book.require_mut(name)?.remove_phone(phone))
    }

    fn delete_contact(&mut self, name: &str) -> BookResult<Record> {
        let removed = self
            .book
            .delete(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        info!(contact = name, "Contact deleted");
        Ok(removed)
    }

    fn phones(&self, name: &str) -> BookResult<Vec<Phone>> {
        Ok(self.require(name)?.phones().to_vec())
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<Change> {
        let previous = self.book.require_mut(name)?.set_birthday(birthday)?;
        Ok(match previous {
            Some(_) => Change::Updated,
            None => Change::Added,
        })
    }

    fn show_birthday(&self, name: &str) -> BookResult<BirthdayLookup> {
        self.book.birthday_for(name)
    }

    fn upcoming_birthdays(&self, window_days: Option<u32>) -> Vec<UpcomingBirthday> {
        let window = window_days.unwrap_or(self.default_window_days);
        let today = self.clock.today();
        debug!(%today, window, "Querying upcoming birthdays");
        self.book.upcoming_birthdays(today, window)
    }

    fn book(&self) -> &AddressBook {
        &self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::FixedClock;
    use crate::domain::ValidationError;
    use chrono::NaiveDate;

    fn service() -> ContactServiceImpl {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        ContactServiceImpl::new(AddressBook::new()).with_clock(FixedClock(today))
    }

    #[test]
    fn test_add_contact_then_update() {
        let mut service = service();
        assert_eq!(service.add_contact("John", None).unwrap(), Change::Added);
        assert_eq!(
            service.add_contact("John", Some("1234567890")).unwrap(),
            Change::Updated
        );
        assert_eq!(service.phones("John").unwrap().len(), 1);
    }

    #[test]
    fn test_add_contact_with_bad_phone_creates_nothing() {
        let mut service = service();
        let err = service.add_contact("John", Some("123")).unwrap_err();
        assert!(matches!(err, BookError::Validation(ValidationError::InvalidPhone(_))));
        assert!(service.book().find("John").is_none());
    }

    #[test]
    fn test_add_contact_empty_name() {
        let mut service = service();
        assert_eq!(
            service.add_contact("", None).unwrap_err(),
            BookError::Validation(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_change_phone_unknown_contact() {
        let mut service = service();
        assert_eq!(
            service
                .change_phone("Ghost", "1111111111", "2222222222")
                .unwrap_err(),
            BookError::contact_not_found("Ghost")
        );
    }

    #[test]
    fn test_remove_phone() {
        let mut service = service();
        service.add_contact("John", Some("1234567890")).unwrap();
        assert!(service.remove_phone("John", "1234567890").unwrap());
        assert!(!service.remove_phone("John", "1234567890").unwrap());
    }

    #[test]
    fn test_delete_contact() {
        let mut service = service();
        service.add_contact("John", None).unwrap();
        assert_eq!(service.delete_contact("John").unwrap().name().as_str(), "John");
        assert!(matches!(
            service.delete_contact("John"),
            Err(BookError::NotFound(_))
        ));
    }

    #[test]
    fn test_add_birthday_reports_change() {
        let mut service = service();
        service.add_contact("John", None).unwrap();
        assert_eq!(service.add_birthday("John", "12.06.1990").unwrap(), Change::Added);
        assert_eq!(
            service.add_birthday("John", "13.06.1990").unwrap(),
            Change::Updated
        );
        assert!(matches!(
            service.add_birthday("Ghost", "13.06.1990"),
            Err(BookError::NotFound(_))
        ));
    }

    #[test]
    fn test_upcoming_uses_clock_and_default_window() {
        let mut service = service().with_default_window(2);
        service.add_contact("Soon", None).unwrap();
        service.add_birthday("Soon", "12.06.1990").unwrap();
        service.add_contact("Later", None).unwrap();
        service.add_birthday("Later", "14.06.1990").unwrap();

        let names: Vec<_> = service
            .upcoming_birthdays(None)
            .into_iter()
            .map(|u| u.name.into_inner())
            .collect();
        assert_eq!(names, vec!["Soon"]);

        assert_eq!(service.upcoming_birthdays(Some(7)).len(), 2);
    }
}
