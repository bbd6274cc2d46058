//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `chrono` format string for the external `DD.MM.YYYY` representation.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields such as "1.6.1990"; the shape check
// keeps rendering identical to the accepted input.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday shape regex")
});

/// A birth date, written externally as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("12.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "12.06.1990");
/// assert!(Birthday::new("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Validation Rules
    ///
    /// - Two-digit day, two-digit month, four-digit year, dot separated
    /// - Must denote a real calendar date (`29.02` only in leap years)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` carrying the rejected input.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize in the external DD.MM.YYYY form
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("12.06.1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 12).unwrap());
        assert_eq!(birthday.day(), 12);
        assert_eq!(birthday.month(), 6);
    }

    #[test]
    fn test_birthday_round_trips_rendering() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999"] {
            assert_eq!(Birthday::new(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_shape() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.6.1990").is_err());
        assert!(Birthday::new("1990-06-12").is_err());
        assert!(Birthday::new("12/06/1990").is_err());
        assert!(Birthday::new("12.06.90").is_err());
        assert!(Birthday::new(" 12.06.1990").is_err());
        assert!(Birthday::new("12.06.1990 ").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.1990").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("15.13.2000").is_err());
        assert!(Birthday::new("31.04.2000").is_err());
    }

    #[test]
    fn test_birthday_error_mentions_format() {
        let err = Birthday::new("tomorrow").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("tomorrow".to_string()));
        assert!(err.to_string().contains("DD.MM.YYYY"));
    }

    #[test]
    fn test_birthday_from_str() {
        let birthday: Birthday = "24.08.1991".parse().unwrap();
        assert_eq!(birthday.to_string(), "24.08.1991");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("12.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"12.06.1990\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1990-06-12\"");
        assert!(result.is_err());
    }
}
