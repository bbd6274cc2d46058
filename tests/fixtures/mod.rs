//! Test fixtures and sample data.
//!
//! Reusable records, address books and dates for the integration tests.

#![allow(dead_code)]

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a date, panicking on an impossible one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a sample record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid test name");
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid test birthday");
    }
    record
}

/// Create an address book containing `records`.
pub fn book_of(records: Vec<Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}

/// A small address book mixing phones and birthdays.
pub fn mixed_book() -> AddressBook {
    book_of(vec![
        sample_record("John", &["1234567890", "5555555555"], Some("12.06.1990")),
        sample_record("Jane", &["0987654321"], None),
        sample_record("Leap", &[], Some("29.02.2000")),
        sample_record("Nobody", &[], None),
    ])
}
