/// Maximum valid year (inclusive), the largest with a four-digit canonical form
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Three-letter month names used in printed schedules (index 0 unused)
pub const MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names (index 0 unused)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Digits in a year component (`YYYY`)
pub const YEAR_DIGITS: usize = 4;
/// Digits in an ISO month or day component (`MM`, `DD`)
pub const ISO_PART_DIGITS: usize = 2;
/// Day-first input may drop the leading zero of a month or day (`3/2/2026`)
pub const DAY_FIRST_MIN_PART_DIGITS: usize = 1;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two ends of a serialized segment (ISO 8601 interval)
pub const SEGMENT_SEPARATOR: char = '/';
/// Day-first separator used by date pickers (`dd/mm/yyyy`)
pub const DAY_FIRST_SEPARATOR: char = '/';
/// Characters that start the time-of-day part of a timestamp
pub const TIME_MARKERS: [char; 2] = ['T', ' '];

/// Longest implicit schedule expanded from a start day and a day count
pub const MAX_DAY_COUNT: u32 = 366;

/// Rendered in place of an empty schedule
pub const EMPTY_PLACEHOLDER: &str = "-";
