//! Address Book - a personal contact manager with birthday reminders.
//!
//! Stores named contacts, each with validated ten-digit phone numbers and an
//! optional birthday, and answers which birthdays come up in the next few
//! days (weekend celebrations move to Monday).
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: Contact record and the name-keyed address book
//! - **calendar**: Next-anniversary and weekend-shift arithmetic, injectable clock
//! - **services**: Business operations behind each shell command
//! - **repositories**: Versioned JSON snapshot persistence
//! - **shell**: Line-oriented interactive front end
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod calendar;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod shell;

pub use calendar::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, BirthdayLookup, Record, UpcomingBirthday};
pub use repositories::{BookRepository, InMemoryRepository, JsonFileRepository};
pub use services::{ContactService, ContactServiceImpl};
pub use shell::Shell;
