//! Shared constructors for unit tests.

use crate::CalendarDay;

pub fn day(year: u16, month: u8, day: u8) -> CalendarDay {
    CalendarDay::new(year, month, day).expect("test day should be valid")
}

/// Parses canonical `YYYY-MM-DD` strings, panicking on bad fixtures.
pub fn days(values: &[&str]) -> Vec<CalendarDay> {
    values
        .iter()
        .map(|s| s.parse().expect("test day should be canonical"))
        .collect()
}
