//! Calendar arithmetic for birthday reminders.
//!
//! Works out when a birthday next falls on or after a reference date, and
//! moves weekend celebrations to the following Monday.

use crate::domain::Birthday;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Default look-ahead window, in days, for upcoming birthdays.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Source of "today" for date-relative queries.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date. Used by tests and benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The date a birthday falls on in `year`.
///
/// A 29 February birthday is observed on 1 March in non-leap years.
pub fn anniversary_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// The first anniversary of `birthday` on or after `today`.
///
/// Returns `None` only when the date would leave chrono's supported range.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    anniversary_in(birthday, today.year() + 1)
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// When to congratulate for `birthday`, if it falls within `window_days` of `today`.
///
/// The window is inclusive on both ends and measured on the real anniversary;
/// the weekend shift is applied afterwards, so a shifted date may land just
/// past the window.
pub fn celebration_within(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let next = next_occurrence(birthday, today)?;
    let days_until = (next - today).num_days();
    if (0..=i64::from(window_days)).contains(&days_until) {
        Some(shift_weekend(next))
    } else {
        None
    }
}
