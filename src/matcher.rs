//! Deciding whether a class schedule falls inside a filter window.
//!
//! Explicit schedules match when any single class day lies in the window.
//! Implicit (start + day count) schedules have no per-day data and are tested
//! as one contiguous interval. The two semantics differ for a gapped explicit
//! schedule whose gap covers the whole window, and both are kept.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{CalendarDay, ClassSchedule, DateLike, ScheduleSource};

/// Inclusive `[from, to]` window; a missing bound is unbounded on that side.
///
/// A reversed window (`from > to`) is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterWindow {
    pub from: Option<CalendarDay>,
    pub to:   Option<CalendarDay>,
}

/// Which overlap test to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// At least one class day lies inside the window
    AnyDay,
    /// The first-to-last span intersects the window
    Interval,
}

impl FilterWindow {
    pub const fn new(from: Option<CalendarDay>, to: Option<CalendarDay>) -> Self {
        Self { from, to }
    }

    /// Matches every non-empty schedule.
    pub const fn unbounded() -> Self {
        Self { from: None, to: None }
    }

    /// Builds a window from date-picker input (`dd/mm/yyyy`, `YYYY-MM-DD`, ...).
    /// Blank or unparseable bounds become unbounded.
    pub fn parse<F, T>(from: &F, to: &T) -> Self
    where
        F: DateLike + ?Sized,
        T: DateLike + ?Sized,
    {
        Self {
            from: from.to_calendar_day(),
            to:   to.to_calendar_day(),
        }
    }

    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn is_reversed(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    pub fn contains(&self, day: &CalendarDay) -> bool {
        self.from.is_none_or(|from| *day >= from) && self.to.is_none_or(|to| *day <= to)
    }

    /// Whether `[start, end]` intersects the window
    pub fn intersects(&self, start: &CalendarDay, end: &CalendarDay) -> bool {
        self.to.is_none_or(|to| *start <= to) && self.from.is_none_or(|from| *end >= from)
    }
}

impl MatchMode {
    /// The semantic a schedule's own representation calls for
    pub const fn for_schedule(schedule: &ClassSchedule) -> Self {
        match schedule.source() {
            ScheduleSource::Explicit => Self::AnyDay,
            ScheduleSource::Implicit { .. } => Self::Interval,
        }
    }
}

/// Whether the schedule matches the window, using any-day semantics for
/// explicit schedules and interval semantics for implicit ones.
///
/// An empty schedule never matches, not even the unbounded window.
pub fn overlaps(schedule: &ClassSchedule, window: &FilterWindow) -> bool {
    overlaps_with(schedule, window, MatchMode::for_schedule(schedule))
}

/// Like [`overlaps`] with the semantic chosen by the caller.
pub fn overlaps_with(schedule: &ClassSchedule, window: &FilterWindow, mode: MatchMode) -> bool {
    match mode {
        MatchMode::AnyDay => schedule.days().iter().any(|day| window.contains(day)),
        MatchMode::Interval => interval_of(schedule).is_some_and(|(start, end)| window.intersects(&start, &end)),
    }
}

/// Implicit schedules use their declared `[start, start + count - 1]`;
/// explicit ones their first and last day.
fn interval_of(schedule: &ClassSchedule) -> Option<(CalendarDay, CalendarDay)> {
    if schedule.is_empty() {
        return None;
    }
    match schedule.source() {
        ScheduleSource::Implicit { start, day_count } => {
            Some((start, start.add_days(i64::from(day_count) - 1)))
        },
        ScheduleSource::Explicit => Some((schedule.first_day()?, schedule.last_day()?)),
    }
}

pub fn first_day(schedule: &ClassSchedule) -> Option<CalendarDay> {
    schedule.first_day()
}

pub fn last_day(schedule: &ClassSchedule) -> Option<CalendarDay> {
    schedule.last_day()
}

/// Keeps the items whose schedule overlaps the window, preserving order.
pub fn filter_by_window<'a, T, F>(items: &'a [T], window: &FilterWindow, schedule_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &ClassSchedule,
{
    items
        .iter()
        .filter(|item| overlaps(schedule_of(*item), window))
        .collect()
}

/// Sorts soonest class first. Ties and empty schedules keep their relative
/// order; empty schedules go last.
pub fn sort_soonest_first<T, F>(items: &mut [T], schedule_of: F)
where
    F: Fn(&T) -> &ClassSchedule,
{
    items.sort_by(|a, b| match (first_day(schedule_of(a)), first_day(schedule_of(b))) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
