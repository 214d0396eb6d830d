use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDay, ParseError, SEGMENT_SEPARATOR, prelude::*};

/// A run of consecutive calendar days, both ends inclusive.
/// The start day must be less than or equal to the end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateSegment {
    start: CalendarDay,
    end:   CalendarDay,
}

/// Error type for segment construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    /// Start day is after end day.
    #[error("Invalid segment: start ({start}) is after end ({end})")]
    InvalidSegment { start: CalendarDay, end: CalendarDay },

    /// Error parsing one of the days.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid segment format.
    #[error("Invalid segment format: {0}")]
    InvalidFormat(String),
}

impl DateSegment {
    /// Creates a new segment with validation.
    ///
    /// # Errors
    /// Returns `SegmentError::InvalidSegment` if start > end.
    pub fn new(start: CalendarDay, end: CalendarDay) -> Result<Self, SegmentError> {
        if start > end {
            return Err(SegmentError::InvalidSegment { start, end });
        }
        Ok(Self { start, end })
    }

    /// A one-day segment
    pub const fn single(day: CalendarDay) -> Self {
        Self { start: day, end: day }
    }

    /// Builds the segment spanning two days given in either order.
    pub(crate) fn ordered(a: CalendarDay, b: CalendarDay) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub const fn start(&self) -> CalendarDay {
        self.start
    }

    pub const fn end(&self) -> CalendarDay {
        self.end
    }

    pub const fn dates(&self) -> (CalendarDay, CalendarDay) {
        (self.start, self.end)
    }

    /// Number of days covered, at least 1
    pub fn day_count(&self) -> i64 {
        self.start.days_until(&self.end) + 1
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Whether start and end fall in the same month of the same year
    pub fn within_one_month(&self) -> bool {
        self.start.same_month(&self.end)
    }

    pub fn contains(&self, day: &CalendarDay) -> bool {
        self.start <= *day && *day <= self.end
    }

    /// Whether the two segments share at least one day
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether `self` lies entirely inside `other`
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Whether `other` begins on the day right after `self` ends
    pub fn is_followed_by(&self, other: &Self) -> bool {
        self.end.days_until(&other.start) == 1
    }

    /// Every day in the segment, in order
    pub fn days(&self) -> impl Iterator<Item = CalendarDay> + '_ {
        std::iter::successors(Some(self.start), move |day| day.succ().filter(|next| *next <= self.end))
    }
}

impl FromStr for DateSegment {
    type Err = SegmentError;

    /// Parses `YYYY-MM-DD/YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(SEGMENT_SEPARATOR).count();

        match separator_count {
            0 => Err(SegmentError::InvalidFormat(format!(
                "No segment separator found (expected '{SEGMENT_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start, end) = trimmed.split_once(SEGMENT_SEPARATOR).ok_or_else(|| {
                    SegmentError::InvalidFormat(format!("Separator '{SEGMENT_SEPARATOR}' not found: {s}"))
                })?;
                Self::new(start.trim().parse()?, end.trim().parse()?)
            },
            _ => Err(SegmentError::InvalidFormat(format!(
                "Too many '{SEGMENT_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateSegment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
