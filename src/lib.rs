mod consts;
mod grouping;
mod matcher;
mod normalize;
mod prelude;
mod record;
mod schedule;
mod segment;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use grouping::{FormatOptions, MonthStyle, format_days, format_segments, format_segments_with, group_consecutive};
pub use matcher::{FilterWindow, MatchMode, filter_by_window, first_day, last_day, overlaps, overlaps_with, sort_soonest_first};
pub use normalize::{DateLike, add_days, diff_days, normalize, to_canonical_string};
pub use record::ClassRecord;
pub use schedule::{ClassSchedule, ScheduleSource};
pub use segment::{DateSegment, SegmentError};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;
use types::{civil_from_days, days_from_civil};

/// A civil date (year, month, day) with no time of day and no timezone.
///
/// Ordering is chronological, which for this representation is the
/// lexicographic order of (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDay {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDay {
    /// 0001-01-01, the earliest representable day
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };

    /// 9999-12-31, the latest representable day
    pub const MAX: Self = Self {
        year:  Year::MAX,
        month: Month::DECEMBER,
        day:   Day::THIRTY_FIRST,
    };

    /// Creates a day from raw components, validating each one.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Creates a day from already-validated year and month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, ParseError> {
        let day = Day::new(day, year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Whether both days fall in the same month of the same year
    pub fn same_month(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Days elapsed since 1970-01-01 (negative before it)
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year(), self.month(), self.day())
    }

    /// Inverse of [`CalendarDay::days_since_epoch`]; `None` outside years 1-9999.
    pub fn from_days_since_epoch(days: i64) -> Option<Self> {
        let (year, month, day) = civil_from_days(days)?;
        Self::new(year, month, day).ok()
    }

    /// Moves `n` days forward (or backward when negative), rolling over months
    /// and years. Returns `None` when the result leaves years 1-9999.
    pub fn checked_add_days(&self, n: i64) -> Option<Self> {
        Self::from_days_since_epoch(self.days_since_epoch().checked_add(n)?)
    }

    /// Like [`CalendarDay::checked_add_days`] but clamps to
    /// [`CalendarDay::MIN`] / [`CalendarDay::MAX`].
    pub fn add_days(&self, n: i64) -> Self {
        self.checked_add_days(n)
            .unwrap_or(if n < 0 { Self::MIN } else { Self::MAX })
    }

    /// Whole days from `self` to `other` (`other - self`).
    pub fn days_until(&self, other: &Self) -> i64 {
        other.days_since_epoch() - self.days_since_epoch()
    }

    /// The following day, `None` after 9999-12-31
    pub fn succ(&self) -> Option<Self> {
        self.checked_add_days(1)
    }

    /// Reads a component of `min_digits..=max_digits` ASCII digits. Signs,
    /// whitespace and other widths are rejected.
    fn parse_digits<T: FromStr>(s: &str, min_digits: usize, max_digits: usize) -> Result<T, ParseError> {
        if !(min_digits..=max_digits).contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Parses `YYYY`, `MM`, `DD` components (in that order) into a validated day.
    /// Month and day take between `min_part_digits` and 2 digits.
    fn from_components(year: &str, month: &str, day: &str, min_part_digits: usize) -> Result<Self, ParseError> {
        let year = Self::parse_digits::<u16>(year, YEAR_DIGITS, YEAR_DIGITS)?;
        let month = Self::parse_digits::<u8>(month, min_part_digits, ISO_PART_DIGITS)?;
        let day = Self::parse_digits::<u8>(day, min_part_digits, ISO_PART_DIGITS)?;
        Self::new(year, month, day)
    }

    /// Strict day-first parsing (`dd/mm/yyyy`), as typed into date pickers.
    ///
    /// # Errors
    /// Returns `ParseError` when the string is not three slash-separated
    /// numeric components (1-2 digit day and month, 4-digit year) naming an
    /// existing day.
    pub fn parse_day_first(s: &str) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = trimmed.split(DAY_FIRST_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [day, month, year] => Self::from_components(year, month, day, DAY_FIRST_MIN_PART_DIGITS),
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected dd{DAY_FIRST_SEPARATOR}mm{DAY_FIRST_SEPARATOR}yyyy, found {} component(s)",
                parts.len()
            ))),
        }
    }
}

impl FromStr for CalendarDay {
    type Err = ParseError;

    /// Strict ISO parsing: exactly `YYYY-MM-DD` after trimming whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        match parts.as_slice() {
            [year, month, day] => Self::from_components(year, month, day, ISO_PART_DIGITS),
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected 2 {DATE_SEPARATOR} separators, found {}: {trimmed}",
                parts.len() - 1
            ))),
        }
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDay {
    type Error = ParseError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let year = u16::try_from(date.year()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDay {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
