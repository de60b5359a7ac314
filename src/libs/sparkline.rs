//! Sparklines of daily logged hours, with an optional axis of week or month
//! labels underneath.
//!
//! Both the sparkline and the axis use one character per workday (Monday to
//! Friday) so that they line up when printed below each other.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

pub const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeType {
    Weekly,
    Monthly,
    Yearly,
}

/// Classifies an inclusive range: up to 14 days weekly, up to 60 monthly.
pub fn determine_date_range_type(from: NaiveDate, to: NaiveDate) -> DateRangeType {
    let days = (to - from).num_days() + 1;
    if days <= 14 {
        DateRangeType::Weekly
    } else if days <= 60 {
        DateRangeType::Monthly
    } else {
        DateRangeType::Yearly
    }
}

pub fn is_workday(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Workdays in the inclusive range, in order.
pub fn workdays(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |day| *day <= to).filter(|day| is_workday(*day))
}

/// Renders `daily` seconds as one bar per workday between `from` and `to`.
///
/// Days without time are blank. Values are scaled between `minimum`
/// (default 0) and `maximum` (default: largest value) and clamped to that
/// range. Returns an empty string when nothing was logged on any workday.
pub fn generate_sparkline_from_daily_data(
    daily: &BTreeMap<NaiveDate, i64>,
    from: NaiveDate,
    to: NaiveDate,
    maximum: Option<f64>,
    minimum: Option<f64>,
) -> String {
    let hours: Vec<f64> = workdays(from, to).map(|day| daily.get(&day).copied().unwrap_or(0) as f64 / 3600.0).collect();

    if hours.iter().all(|h| *h <= 0.0) {
        return String::new();
    }

    let minimum = minimum.unwrap_or(0.0);
    let maximum = maximum.unwrap_or_else(|| hours.iter().cloned().fold(f64::MIN, f64::max));
    let span = maximum - minimum;
    let top = SPARKLINE_CHARS.len() - 1;

    hours
        .iter()
        .map(|value| {
            if *value <= 0.0 {
                return ' ';
            }
            if span <= 0.0 {
                return SPARKLINE_CHARS[top];
            }
            let ratio = ((value - minimum) / span).clamp(0.0, 1.0);
            SPARKLINE_CHARS[(ratio * top as f64).round() as usize]
        })
        .collect()
}

/// Axis labels aligned with [`generate_sparkline_from_daily_data`].
///
/// Monthly ranges get `W1`, `W2`, ... at the first workday of each week,
/// yearly ranges get month abbreviations at the first workday of each month.
/// A label is skipped when it would overlap the previous one or run past the
/// last workday. Weekly ranges have no axis.
pub fn generate_axis_labels(from: NaiveDate, to: NaiveDate, range_type: DateRangeType) -> String {
    if range_type == DateRangeType::Weekly {
        return String::new();
    }

    let days: Vec<NaiveDate> = workdays(from, to).collect();
    let mut buffer = vec![' '; days.len()];
    let mut next_free = 0;
    let mut week_number = 0;
    let mut previous: Option<NaiveDate> = None;

    for (index, day) in days.iter().enumerate() {
        let label = match range_type {
            DateRangeType::Monthly => {
                let new_week = previous.map_or(true, |prev| {
                    *day - prev >= Duration::days(7) || day.weekday().num_days_from_monday() < prev.weekday().num_days_from_monday()
                });
                if new_week {
                    week_number += 1;
                    Some(format!("W{}", week_number))
                } else {
                    None
                }
            }
            DateRangeType::Yearly => {
                let new_month = previous.map_or(true, |prev| prev.month() != day.month() || prev.year() != day.year());
                new_month.then(|| day.format("%b").to_string())
            }
            DateRangeType::Weekly => None,
        };
        previous = Some(*day);

        if let Some(label) = label {
            let width = label.chars().count();
            if index >= next_free && index + width <= buffer.len() {
                for (offset, c) in label.chars().enumerate() {
                    buffer[index + offset] = c;
                }
                next_free = index + width + 1;
            }
        }
    }

    buffer.into_iter().collect::<String>().trim_end().to_string()
}
