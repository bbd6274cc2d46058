//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by contact and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Malformed phone, birthday or name input
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The record already holds this phone number
    #[error("Phone number {0} already exists for this contact")]
    DuplicatePhone(String),

    /// A contact or phone that must exist does not
    #[error("{0} not found")]
    NotFound(String),
}

impl BookError {
    /// Build a `NotFound` error for a missing contact.
    pub fn contact_not_found(name: &str) -> Self {
        Self::NotFound(format!("Contact {}", name))
    }

    /// Build a `NotFound` error for a missing phone number.
    pub fn phone_not_found(phone: &str) -> Self {
        Self::NotFound(format!("Phone number {}", phone))
    }
}

/// Errors that can occur while loading or saving a snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or has invalid fields
    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an unknown format version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The snapshot parsed but breaks an address book invariant
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors reported by the interactive command shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number or shape of arguments
    #[error("Arguments must be: {0}")]
    Usage(&'static str),

    /// The command word is not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
