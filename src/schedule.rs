use serde::{Deserialize, Serialize};

use crate::{CalendarDay, DateLike, DateSegment, MAX_DAY_COUNT, format_segments, group_consecutive};

/// Which representation a [`ClassSchedule`] was reconciled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScheduleSource {
    /// An authoritative list of specific dates
    Explicit,
    /// A start day plus a day count, assumed contiguous
    Implicit { start: CalendarDay, day_count: u32 },
}

/// The days one class meets on: strictly ascending, no duplicates.
///
/// An empty schedule means "no usable data": it never matches a filter and
/// renders as a placeholder. Schedules are values; editing one means building
/// a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StoredSchedule")]
pub struct ClassSchedule {
    days:   Vec<CalendarDay>,
    source: ScheduleSource,
}

impl ClassSchedule {
    /// The schedule with no days.
    pub const fn empty() -> Self {
        Self {
            days:   Vec::new(),
            source: ScheduleSource::Explicit,
        }
    }

    /// Builds an explicit schedule from an unordered list of date-like values.
    ///
    /// Entries that do not normalize are dropped (and logged); the rest are
    /// sorted and deduplicated.
    pub fn explicit<I>(days: I) -> Self
    where
        I: IntoIterator,
        I::Item: DateLike,
    {
        let mut dropped = 0usize;
        let mut parsed: Vec<CalendarDay> = days
            .into_iter()
            .filter_map(|value| {
                let day = value.to_calendar_day();
                dropped += usize::from(day.is_none());
                day
            })
            .collect();
        if dropped > 0 {
            log::warn!("Dropped {dropped} unparseable day(s) from class schedule");
        }

        parsed.sort_unstable();
        parsed.dedup();
        Self {
            days:   parsed,
            source: ScheduleSource::Explicit,
        }
    }

    /// Expands `day_count` consecutive days from `start`.
    ///
    /// A count of 0 is treated as 1 and counts above [`MAX_DAY_COUNT`] are
    /// clamped to it. Expansion stops at 9999-12-31.
    pub fn implicit(start: CalendarDay, day_count: u32) -> Self {
        if day_count > MAX_DAY_COUNT {
            log::warn!("Day count {day_count} starting {start} exceeds {MAX_DAY_COUNT}; clamping");
        }
        let day_count = day_count.clamp(1, MAX_DAY_COUNT);
        let days = std::iter::successors(Some(start), CalendarDay::succ)
            .take(day_count as usize)
            .collect();
        Self {
            days,
            source: ScheduleSource::Implicit { start, day_count },
        }
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub const fn source(&self) -> ScheduleSource {
        self.source
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self.source, ScheduleSource::Explicit)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Earliest day, `None` when empty
    pub fn first_day(&self) -> Option<CalendarDay> {
        self.days.first().copied()
    }

    /// Latest day, `None` when empty
    pub fn last_day(&self) -> Option<CalendarDay> {
        self.days.last().copied()
    }

    pub fn contains(&self, day: &CalendarDay) -> bool {
        self.days.binary_search(day).is_ok()
    }

    /// First to last day, gaps included
    pub fn span(&self) -> Option<DateSegment> {
        Some(DateSegment::ordered(self.first_day()?, self.last_day()?))
    }

    pub fn segments(&self) -> Vec<DateSegment> {
        group_consecutive(&self.days)
    }

    /// Human-readable ranges, e.g. "3-4, 17-18 Feb 2026"
    pub fn display(&self) -> String {
        format_segments(&self.segments())
    }

    /// Canonical strings for writing the schedule back as an explicit `days` list
    pub fn to_day_strings(&self) -> Vec<String> {
        self.days.iter().map(ToString::to_string).collect()
    }

    /// 1-based number of the training day `today` falls on.
    ///
    /// Counts the class days up to and including `today`, never less than 1,
    /// so a date before the class starts resolves to day 1 and a date after it
    /// ends resolves to the last day. `None` for an empty schedule.
    pub fn training_day_number(&self, today: CalendarDay) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let elapsed = self.days.partition_point(|day| *day <= today);
        Some(elapsed.max(1))
    }
}

/// Deserialized form; rebuilt through the constructors so the ordering
/// invariant holds for whatever was stored.
#[derive(Deserialize)]
struct StoredSchedule {
    days:   Vec<CalendarDay>,
    source: ScheduleSource,
}

impl From<StoredSchedule> for ClassSchedule {
    fn from(stored: StoredSchedule) -> Self {
        match stored.source {
            ScheduleSource::Explicit => Self::explicit(stored.days),
            ScheduleSource::Implicit { start, day_count } => Self::implicit(start, day_count),
        }
    }
}

impl Default for ClassSchedule {
    fn default() -> Self {
        Self::empty()
    }
}
