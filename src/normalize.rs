//! Turning loosely-typed date input into [`CalendarDay`] values and back.
//!
//! Upstream records come from an external scheduling feed and from free-text
//! date pickers, so every entry point here is lenient: anything that does not
//! name a single civil day becomes `None` instead of an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::{CalendarDay, TIME_MARKERS, YEAR_DIGITS};

/// Formats tried, in order, once the ISO and day-first forms have failed.
const HUMAN_FORMATS: [&str; 7] = [
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%Y/%m/%d",
];

/// A value that may name a civil day.
///
/// Timezone-aware values resolve to the date *in their own timezone*, so a
/// value never moves to a neighbouring day through a UTC conversion.
pub trait DateLike {
    fn to_calendar_day(&self) -> Option<CalendarDay>;
}

impl DateLike for CalendarDay {
    fn to_calendar_day(&self) -> Option<CalendarDay> {
        Some(*self)
    }
}

impl DateLike for str {
    fn to_calendar_day(&self) -> Option<CalendarDay> {
        parse_text(self)
    }
}

impl DateLike for String {
    fn to_calendar_day(&self) -> Option<CalendarDay> {
        parse_text(self)
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_calendar_day(&self) -> Option<CalendarDay> {
        (**self).to_calendar_day()
    }
}

impl<T: DateLike> DateLike for Option<T> {
    fn to_calendar_day(&self) -> Option<CalendarDay> {
        self.as_ref().and_then(DateLike::to_calendar_day)
    }
}

impl DateLike for NaiveDate {
    fn to_calendar_day(&self) -> Option<CalendarDay> {
        CalendarDay::try_from(*self).ok()
    }
}

impl DateLike for NaiveDateTime {
    fn to_calendar_day(&self) -> Option<CalendarDay> {
        self.date().to_calendar_day()
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_calendar_day(&self) -> Option<CalendarDay> {
        self.date_naive().to_calendar_day()
    }
}

/// Normalizes any date-like input to a [`CalendarDay`].
///
/// Accepted text forms, tried in order:
/// - `YYYY-MM-DD`, optionally followed by `T…` or ` …` (the time part is dropped)
/// - `dd/mm/yyyy`
/// - RFC 2822 timestamps
/// - `18 Feb 2026`, `Feb 18, 2026`, `2026/02/18` and close variants
///
/// Empty, malformed or out-of-range input yields `None`.
pub fn normalize<T: DateLike + ?Sized>(input: &T) -> Option<CalendarDay> {
    input.to_calendar_day()
}

/// Zero-padded `YYYY-MM-DD`; `normalize` reads it back unchanged.
pub fn to_canonical_string(day: CalendarDay) -> String {
    day.to_string()
}

/// Calendar arithmetic, clamped to the representable years.
pub fn add_days(day: CalendarDay, n: i64) -> CalendarDay {
    day.add_days(n)
}

/// `b - a` in whole days.
pub fn diff_days(a: CalendarDay, b: CalendarDay) -> i64 {
    a.days_until(&b)
}

fn parse_text(input: &str) -> Option<CalendarDay> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = parse_leading_iso(trimmed)
        .or_else(|| CalendarDay::parse_day_first(trimmed).ok())
        .or_else(|| parse_rfc2822(trimmed))
        .or_else(|| parse_human(trimmed));

    if parsed.is_none() {
        log::debug!("Unrecognised date input: {trimmed:?}");
    }
    parsed
}

fn parse_leading_iso(s: &str) -> Option<CalendarDay> {
    let head = s.split(TIME_MARKERS).next()?;
    head.parse().ok()
}

/// `%Y` accepts any width, so the year must appear as its own run of four digits.
fn has_full_year(s: &str) -> bool {
    s.split(|c: char| !c.is_ascii_digit()).any(|run| run.len() == YEAR_DIGITS)
}

fn parse_rfc2822(s: &str) -> Option<CalendarDay> {
    DateTime::parse_from_rfc2822(s).ok()?.to_calendar_day()
}

fn parse_human(s: &str) -> Option<CalendarDay> {
    if !has_full_year(s) {
        return None;
    }
    HUMAN_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.to_calendar_day())
}
