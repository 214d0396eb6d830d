//! The class record shape read from the scheduling feed.
//!
//! Records are loosely typed: `days` may hold non-strings, `dayCount` may be a
//! string or a float, any field may be `null` or missing. Deserialization
//! never fails on those; the bad values just read as absent.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{CalendarDay, ClassSchedule, normalize};

/// Schedule fields of a stored class. Either `days` or `date` + `day_count`
/// describes the class days; a non-empty `days` list wins when both exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    #[serde(default, deserialize_with = "lenient_days", skip_serializing_if = "Option::is_none")]
    pub days:      Option<Vec<Option<String>>>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub date:      Option<String>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub day_count: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Integer(i64),
    Float(f64),
    List(Vec<Loose>),
    Other(IgnoredAny),
}

impl Loose {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    fn into_count(self) -> Option<u32> {
        let count = match self {
            Self::Integer(n) => u32::try_from(n).ok(),
            Self::Float(f) if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let whole = f as u32;
                Some(whole)
            },
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        };
        count.filter(|n| *n >= 1)
    }
}

fn lenient_days<'de, D>(deserializer: D) -> Result<Option<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::List(items) => Some(items.into_iter().map(Loose::into_text).collect()),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.into_text())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.into_count())
}

impl ClassRecord {
    /// Reconciles the record into a schedule.
    ///
    /// A non-empty `days` list is authoritative even if none of its entries
    /// parse. Otherwise `date` expands over `day_count` days (1 when missing
    /// or invalid). With neither usable the schedule is empty, which excludes
    /// the class from every filter.
    pub fn schedule(&self) -> ClassSchedule {
        if let Some(days) = self.days.as_ref().filter(|days| !days.is_empty()) {
            return ClassSchedule::explicit(days);
        }
        match normalize(&self.date) {
            Some(start) => ClassSchedule::implicit(start, self.day_count.unwrap_or(1)),
            None => ClassSchedule::empty(),
        }
    }

    /// Like [`ClassRecord::schedule`], but a record with no usable day becomes
    /// a one-day class on `today`.
    pub fn schedule_or(&self, today: CalendarDay) -> ClassSchedule {
        let schedule = self.schedule();
        if schedule.is_empty() {
            log::warn!("Class record has no usable dates; defaulting to {today}");
            return ClassSchedule::implicit(today, 1);
        }
        schedule
    }

    /// The record to store for an edited schedule: an explicit day list, with
    /// `date` and `day_count` kept in step for readers of the older fields.
    pub fn from_schedule(schedule: &ClassSchedule) -> Self {
        Self {
            days:      Some(schedule.to_day_strings().into_iter().map(Some).collect()),
            date:      schedule.first_day().map(|day| day.to_string()),
            day_count: u32::try_from(schedule.len()).ok().filter(|n| *n >= 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, days};
    use crate::{FilterWindow, ScheduleSource, overlaps};

    fn record(json: &str) -> ClassRecord {
        serde_json::from_str(json).expect("record should deserialize")
    }

    #[test]
    fn test_explicit_days_win_over_date() {
        let rec = record(r#"{"days": ["2026-02-18", "2026-02-17"], "date": "2026-03-01", "dayCount": 5}"#);
        let schedule = rec.schedule();
        assert!(schedule.is_explicit());
        assert_eq!(schedule.days(), days(&["2026-02-17", "2026-02-18"]).as_slice());
    }

    #[test]
    fn test_empty_days_fall_back_to_date() {
        let rec = record(r#"{"days": [], "date": "2026-02-10T00:00:00.000Z", "dayCount": 3}"#);
        let schedule = rec.schedule();
        assert_eq!(
            schedule.source(),
            ScheduleSource::Implicit {
                start:     day(2026, 2, 10),
                day_count: 3,
            }
        );
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_day_count_forms() {
        struct TestCase {
            json:     &'static str,
            expected: Option<u32>,
        }

        let cases = [
            TestCase { json: r#"{"dayCount": 3}"#, expected: Some(3) },
            TestCase { json: r#"{"dayCount": "4"}"#, expected: Some(4) },
            TestCase { json: r#"{"dayCount": 2.0}"#, expected: Some(2) },
            TestCase { json: r#"{"dayCount": 2.5}"#, expected: None },
            TestCase { json: r#"{"dayCount": 0}"#, expected: None },
            TestCase { json: r#"{"dayCount": -1}"#, expected: None },
            TestCase { json: r#"{"dayCount": "many"}"#, expected: None },
            TestCase { json: r#"{"dayCount": null}"#, expected: None },
            TestCase { json: r#"{"dayCount": {"n": 1}}"#, expected: None },
            TestCase { json: "{}", expected: None },
        ];

        for case in &cases {
            assert_eq!(record(case.json).day_count, case.expected, "{}", case.json);
        }
    }

    #[test]
    fn test_oversized_day_count_is_clamped() {
        let rec = record(r#"{"date": "2026-02-10", "dayCount": 4000000000}"#);
        assert_eq!(rec.day_count, Some(4_000_000_000));
        assert_eq!(rec.schedule().len(), crate::MAX_DAY_COUNT as usize);
    }

    #[test]
    fn test_missing_day_count_defaults_to_one_day() {
        let rec = record(r#"{"date": "2026-02-10"}"#);
        assert_eq!(rec.schedule().days(), &[day(2026, 2, 10)]);
    }

    #[test]
    fn test_malformed_fields_do_not_fail() {
        let rec = record(r#"{"days": ["2026-02-18", 7, null, "garbage"], "date": 12, "title": "ignored"}"#);
        assert_eq!(rec.days.as_ref().map(Vec::len), Some(4));
        assert_eq!(rec.date, None);
        assert_eq!(rec.schedule().days(), &[day(2026, 2, 18)]);

        let rec = record(r#"{"days": "2026-02-18", "date": null}"#);
        assert_eq!(rec.days, None);
        assert!(rec.schedule().is_empty());
    }

    #[test]
    fn test_unusable_days_list_is_still_authoritative() {
        let rec = record(r#"{"days": ["nope"], "date": "2026-02-10", "dayCount": 2}"#);
        let schedule = rec.schedule();
        assert!(schedule.is_empty());
        assert!(!overlaps(&schedule, &FilterWindow::unbounded()));
    }

    #[test]
    fn test_schedule_or_today() {
        let today = day(2026, 10, 18);
        assert_eq!(ClassRecord::default().schedule_or(today).days(), &[today]);

        let rec = record(r#"{"date": "2026-02-10", "dayCount": 2}"#);
        assert_eq!(rec.schedule_or(today).first_day(), Some(day(2026, 2, 10)));
    }

    #[test]
    fn test_from_schedule_writes_explicit_days() {
        let original = record(r#"{"date": "2026-02-10", "dayCount": 2}"#);
        assert!(!original.schedule().is_explicit());

        let edited = ClassSchedule::explicit(["2026-02-10", "2026-02-12"]);
        let rec = ClassRecord::from_schedule(&edited);

        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"days":["2026-02-10","2026-02-12"],"date":"2026-02-10","dayCount":2}"#
        );
        assert_eq!(record(&json).schedule(), edited);
    }

    #[test]
    fn test_from_empty_schedule() {
        let rec = ClassRecord::from_schedule(&ClassSchedule::empty());
        assert_eq!(rec.days, Some(Vec::new()));
        assert_eq!(rec.date, None);
        assert_eq!(rec.day_count, None);
        assert!(rec.schedule().is_empty());
    }
}
