//! Grouping schedule days into consecutive runs and printing them the way
//! class schedules are printed ("3-4, 17-18 Feb 2026").

use serde::{Deserialize, Serialize};

use crate::{CalendarDay, DateSegment, EMPTY_PLACEHOLDER};

fn default_segment_separator() -> String {
    ", ".to_string()
}
fn default_day_separator() -> String {
    "-".to_string()
}
fn default_span_separator() -> String {
    " - ".to_string()
}
fn default_placeholder() -> String {
    EMPTY_PLACEHOLDER.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    /// "Feb"
    #[default]
    Short,
    /// "February"
    Long,
}

/// Rendering settings for [`format_segments_with`].
///
/// Every field has a default, so a partial config deserializes; `Default`
/// gives the printed-schedule conventions used by `format_segments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Between segments: "3-4, 17-18"
    #[serde(default = "default_segment_separator")]
    pub segment_separator: String,
    /// Between the two days of a segment inside one month: "3-4"
    #[serde(default = "default_day_separator")]
    pub day_separator: String,
    /// Between the two ends of a segment crossing a month: "30 Jan 2026 - 2 Feb 2026"
    #[serde(default = "default_span_separator")]
    pub span_separator: String,
    /// Rendered for an empty schedule
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub month_style: MonthStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            segment_separator: default_segment_separator(),
            day_separator:     default_day_separator(),
            span_separator:    default_span_separator(),
            placeholder:       default_placeholder(),
            month_style:       MonthStyle::default(),
        }
    }
}

impl FormatOptions {
    fn month_name(&self, day: &CalendarDay) -> &'static str {
        match self.month_style {
            MonthStyle::Short => day.month_typed().abbreviation(),
            MonthStyle::Long => day.month_typed().name(),
        }
    }

    /// "18 Feb 2026"
    fn full_day(&self, day: &CalendarDay) -> String {
        format!("{} {} {}", day.day(), self.month_name(day), day.year())
    }

    /// "3" or "3-4", no month
    fn day_range(&self, segment: &DateSegment) -> String {
        if segment.is_single_day() {
            segment.start().day().to_string()
        } else {
            format!("{}{}{}", segment.start().day(), self.day_separator, segment.end().day())
        }
    }

    fn full_segment(&self, segment: &DateSegment) -> String {
        let (start, end) = segment.dates();
        if segment.is_single_day() {
            self.full_day(&start)
        } else if segment.within_one_month() {
            format!("{} {} {}", self.day_range(segment), self.month_name(&start), start.year())
        } else {
            format!("{}{}{}", self.full_day(&start), self.span_separator, self.full_day(&end))
        }
    }
}

/// Splits ascending, deduplicated days into maximal runs of consecutive days.
///
/// A gap of even one missing day starts a new segment. Empty input gives no
/// segments.
pub fn group_consecutive(days: &[CalendarDay]) -> Vec<DateSegment> {
    let Some((first, rest)) = days.split_first() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let (mut start, mut end) = (*first, *first);
    for &day in rest {
        if end.days_until(&day) == 1 {
            end = day;
        } else {
            segments.push(DateSegment::ordered(start, end));
            start = day;
            end = day;
        }
    }
    segments.push(DateSegment::ordered(start, end));
    segments
}

/// Renders segments with the default [`FormatOptions`].
pub fn format_segments(segments: &[DateSegment]) -> String {
    format_segments_with(segments, &FormatOptions::default())
}

/// Renders segments for display.
///
/// When every day shares one month and year the month is printed once at the
/// end ("3-4, 17-18 Feb 2026"); otherwise each segment carries its own month
/// and year ("28 Jan 2026, 3-4 Feb 2026", "30 Jan 2026 - 2 Feb 2026").
pub fn format_segments_with(segments: &[DateSegment], options: &FormatOptions) -> String {
    let Some(first) = segments.first().map(DateSegment::start) else {
        return options.placeholder.clone();
    };

    let shared_month = segments
        .iter()
        .all(|s| s.start().same_month(&first) && s.end().same_month(&first));

    if shared_month {
        let days: Vec<String> = segments.iter().map(|s| options.day_range(s)).collect();
        format!(
            "{} {} {}",
            days.join(&options.segment_separator),
            options.month_name(&first),
            first.year()
        )
    } else {
        segments
            .iter()
            .map(|s| options.full_segment(s))
            .collect::<Vec<_>>()
            .join(&options.segment_separator)
    }
}

/// Groups and renders in one step.
pub fn format_days(days: &[CalendarDay]) -> String {
    format_segments(&group_consecutive(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, days};
    use proptest::prelude::*;

    #[test]
    fn test_group_empty() {
        assert!(group_consecutive(&[]).is_empty());
    }

    #[test]
    fn test_group_single_day() {
        let segments = group_consecutive(&[day(2026, 2, 18)]);
        assert_eq!(segments, vec![DateSegment::single(day(2026, 2, 18))]);
    }

    #[test]
    fn test_group_two_runs() {
        let input = days(&["2026-02-03", "2026-02-04", "2026-02-17", "2026-02-18"]);
        let segments = group_consecutive(&input);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].dates(), (day(2026, 2, 3), day(2026, 2, 4)));
        assert_eq!(segments[1].dates(), (day(2026, 2, 17), day(2026, 2, 18)));
    }

    #[test]
    fn test_group_across_month_boundary() {
        let input = days(&["2026-01-30", "2026-01-31", "2026-02-01", "2026-02-02"]);
        let segments = group_consecutive(&input);
        assert_eq!(segments, vec![DateSegment::ordered(day(2026, 1, 30), day(2026, 2, 2))]);
    }

    #[test]
    fn test_group_one_day_gap_splits() {
        let input = days(&["2026-02-10", "2026-02-12"]);
        assert_eq!(group_consecutive(&input).len(), 2);
    }

    #[test]
    fn test_format_cases() {
        struct TestCase {
            days:     &'static [&'static str],
            expected: &'static str,
        }

        let cases = [
            TestCase {
                days:     &["2026-02-03", "2026-02-04", "2026-02-17", "2026-02-18"],
                expected: "3-4, 17-18 Feb 2026",
            },
            TestCase {
                days:     &["2026-01-30", "2026-01-31", "2026-02-01", "2026-02-02"],
                expected: "30 Jan 2026 - 2 Feb 2026",
            },
            TestCase {
                days:     &["2026-02-18"],
                expected: "18 Feb 2026",
            },
            TestCase {
                days:     &["2026-02-03", "2026-02-05", "2026-02-06"],
                expected: "3, 5-6 Feb 2026",
            },
            TestCase {
                days:     &["2026-01-28", "2026-02-03", "2026-02-04"],
                expected: "28 Jan 2026, 3-4 Feb 2026",
            },
            TestCase {
                days:     &["2025-12-31", "2026-01-01", "2026-01-05"],
                expected: "31 Dec 2025 - 1 Jan 2026, 5 Jan 2026",
            },
            TestCase {
                days:     &["2025-02-03", "2026-02-03"],
                expected: "3 Feb 2025, 3 Feb 2026",
            },
        ];

        for case in &cases {
            assert_eq!(format_days(&days(case.days)), case.expected, "{:?}", case.days);
        }
    }

    #[test]
    fn test_format_empty_uses_placeholder() {
        assert_eq!(format_segments(&[]), "-");

        let options = FormatOptions {
            placeholder: "TBC".to_string(),
            ..FormatOptions::default()
        };
        assert_eq!(format_segments_with(&[], &options), "TBC");
    }

    #[test]
    fn test_format_with_long_months() {
        let options = FormatOptions {
            month_style: MonthStyle::Long,
            segment_separator: " & ".to_string(),
            day_separator: "–".to_string(),
            ..FormatOptions::default()
        };
        let segments = group_consecutive(&days(&["2026-02-03", "2026-02-04", "2026-02-17"]));
        assert_eq!(format_segments_with(&segments, &options), "3–4 & 17 February 2026");
    }

    #[test]
    fn test_options_partial_config() {
        let options: FormatOptions = serde_json::from_str(r#"{"month_style": "long"}"#).unwrap();
        assert_eq!(options.month_style, MonthStyle::Long);
        assert_eq!(options.segment_separator, ", ");
        assert_eq!(options.placeholder, "-");

        let defaults: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, FormatOptions::default());
    }

    fn ascending_days() -> impl Strategy<Value = Vec<CalendarDay>> {
        proptest::collection::btree_set(0i64..120, 0..40).prop_map(|offsets| {
            offsets
                .into_iter()
                .map(|n| day(2026, 1, 1).add_days(n))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_grouping_partitions(input in ascending_days()) {
            let segments = group_consecutive(&input);

            let expanded: Vec<CalendarDay> = segments.iter().flat_map(|s| s.days().collect::<Vec<_>>()).collect();
            prop_assert_eq!(&expanded, &input);

            for pair in segments.windows(2) {
                prop_assert!(!pair[0].is_followed_by(&pair[1]));
                prop_assert!(pair[0].end() < pair[1].start());
            }
        }
    }
}
