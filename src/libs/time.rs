//! Parsing of durations, times, dates and date ranges.
//!
//! Parsing is deliberately lenient since everything here comes from the
//! command line:
//!
//! | input kind | accepted forms                                            |
//! |------------|-----------------------------------------------------------|
//! | duration   | `8`, `1.5`, `2h`, `30m`, `5h30m`, `1h 30m`, `1:30`         |
//! | time       | `9`, `09`, `9:30`, `9.30`, `0930`                          |
//! | date       | `today`, `yesterday`, `monday`, `-2`, `2024-12-24`, `24.12.2024`, `24.12.`, `24.12` |
//!
//! Functions that depend on the current day have a `_relative_to` variant
//! taking `today` explicitly.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};
use std::fmt;
use std::str::FromStr;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_duration(value: &str) -> Result<Duration> {
    let invalid = || msg_error_anyhow!(Message::InvalidDuration(value.to_string()));
    let input = value.trim().to_lowercase();
    if input.is_empty() {
        return Err(invalid());
    }

    if let Some((hours, minutes)) = input.split_once(':') {
        let hours: i64 = hours.trim().parse().map_err(|_| invalid())?;
        let minutes: i64 = minutes.trim().parse().map_err(|_| invalid())?;
        if hours < 0 || !(0..60).contains(&minutes) {
            return Err(invalid());
        }
        return Duration::try_hours(hours)
            .zip(Duration::try_minutes(minutes))
            .and_then(|(hours, minutes)| hours.checked_add(&minutes))
            .ok_or_else(invalid);
    }

    // Plain number: hours
    if input.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        let hours: f64 = input.replace(',', ".").parse().map_err(|_| invalid())?;
        if !hours.is_finite() || hours < 0.0 {
            return Err(invalid());
        }
        return from_seconds(hours * 3600.0).ok_or_else(invalid);
    }

    let mut seconds = 0.0_f64;
    let mut number = String::new();
    let mut unit = String::new();
    let mut saw_hours = false;
    let mut chars = input.chars().peekable();
    let mut flush = |number: &mut String, unit: &mut String, saw_hours: &mut bool| -> Result<()> {
        if number.is_empty() {
            return if unit.is_empty() { Ok(()) } else { Err(invalid()) };
        }
        let amount: f64 = number.replace(',', ".").parse().map_err(|_| invalid())?;
        let factor = match unit.as_str() {
            "h" | "hr" | "hrs" | "hour" | "hours" => {
                *saw_hours = true;
                3600.0
            }
            "m" | "min" | "mins" | "minute" | "minutes" => 60.0,
            // trailing number after hours, as in `1h30`
            "" if *saw_hours => 60.0,
            _ => return Err(invalid()),
        };
        seconds += amount * factor;
        number.clear();
        unit.clear();
        Ok(())
    };

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            if !unit.is_empty() {
                flush(&mut number, &mut unit, &mut saw_hours)?;
            }
            number.push(c);
        } else if c.is_alphabetic() {
            unit.push(c);
        } else if c.is_whitespace() {
            if !unit.is_empty() {
                flush(&mut number, &mut unit, &mut saw_hours)?;
            }
        } else {
            return Err(invalid());
        }
    }
    flush(&mut number, &mut unit, &mut saw_hours)?;

    from_seconds(seconds).ok_or_else(invalid)
}

/// `None` when `seconds` is out of range for a `Duration`.
fn from_seconds(seconds: f64) -> Option<Duration> {
    let seconds = seconds.round();
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return None;
    }
    Duration::try_seconds(seconds as i64)
}

pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let invalid = || msg_error_anyhow!(Message::InvalidTime(value.to_string()));
    let input = value.trim();

    let (hours, minutes) = if let Some((h, m)) = input.split_once(|c| c == ':' || c == '.') {
        (h, m)
    } else if input.len() > 2 && input.chars().all(|c| c.is_ascii_digit()) {
        input.split_at(input.len() - 2)
    } else {
        (input, "0")
    };

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    parse_date_relative_to(value, today())
}

pub fn parse_date_relative_to(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    let invalid = || msg_error_anyhow!(Message::InvalidDate(value.to_string()));
    let input = value.trim().to_lowercase();

    match input.as_str() {
        "today" | "t" => return Ok(today),
        "yesterday" | "y" => return Ok(today - Duration::days(1)),
        "tomorrow" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    if let Ok(weekday) = input.parse::<Weekday>() {
        let days_back = (today.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
        return Ok(today - Duration::days(days_back as i64));
    }

    if let Some(days) = input.strip_prefix('-') {
        let days: i64 = days.parse().map_err(|_| invalid())?;
        return Ok(today - Duration::days(days));
    }

    if let Ok(date) = NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
        return Ok(date);
    }

    let parts: Vec<&str> = input.trim_end_matches('.').split('.').collect();
    let (day, month, year) = match parts.as_slice() {
        [day, month] => (*day, *month, today.year()),
        [day, month, year] => {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            (*day, *month, if year < 100 { 2000 + year } else { year })
        }
        _ => return Err(invalid()),
    };
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Named date ranges accepted by `list` and `stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDateRange {
    Today,
    Yesterday,
    Week,
    LastWeek,
    Month,
    LastMonth,
    Year,
    LastYear,
}

impl RelativeDateRange {
    pub const ALL: [RelativeDateRange; 8] = [
        RelativeDateRange::Today,
        RelativeDateRange::Yesterday,
        RelativeDateRange::Week,
        RelativeDateRange::LastWeek,
        RelativeDateRange::Month,
        RelativeDateRange::LastMonth,
        RelativeDateRange::Year,
        RelativeDateRange::LastYear,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            RelativeDateRange::Today => "today",
            RelativeDateRange::Yesterday => "yesterday",
            RelativeDateRange::Week => "week",
            RelativeDateRange::LastWeek => "last-week",
            RelativeDateRange::Month => "month",
            RelativeDateRange::LastMonth => "last-month",
            RelativeDateRange::Year => "year",
            RelativeDateRange::LastYear => "last-year",
        }
    }

    pub fn abbreviations(&self) -> &'static [&'static str] {
        match self {
            RelativeDateRange::Today => &["t", "d", "day"],
            RelativeDateRange::Yesterday => &["y"],
            RelativeDateRange::Week => &["w"],
            RelativeDateRange::LastWeek => &["lw"],
            RelativeDateRange::Month => &["m"],
            RelativeDateRange::LastMonth => &["lm"],
            RelativeDateRange::Year => &["yr"],
            RelativeDateRange::LastYear => &["ly"],
        }
    }

    /// Inclusive `(from, to)` for this range as seen from `today`.
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        let first_of_month = today.with_day(1).unwrap_or(today);
        let first_of_year = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);

        match self {
            RelativeDateRange::Today => (today, today),
            RelativeDateRange::Yesterday => {
                let yesterday = today - Duration::days(1);
                (yesterday, yesterday)
            }
            RelativeDateRange::Week => (monday, today),
            RelativeDateRange::LastWeek => (monday - Duration::days(7), monday - Duration::days(1)),
            RelativeDateRange::Month => (first_of_month, today),
            RelativeDateRange::LastMonth => {
                let last_of_previous = first_of_month - Duration::days(1);
                (last_of_previous.with_day(1).unwrap_or(last_of_previous), last_of_previous)
            }
            RelativeDateRange::Year => (first_of_year, today),
            RelativeDateRange::LastYear => {
                let last_of_previous = first_of_year - Duration::days(1);
                (
                    NaiveDate::from_ymd_opt(last_of_previous.year(), 1, 1).unwrap_or(last_of_previous),
                    last_of_previous,
                )
            }
        }
    }
}

impl fmt::Display for RelativeDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for RelativeDateRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let input = s.trim().to_lowercase().replace('_', "-");
        RelativeDateRange::ALL
            .into_iter()
            .find(|range| range.value() == input || range.abbreviations().contains(&input.as_str()))
            .ok_or_else(|| {
                let valid: Vec<String> = RelativeDateRange::ALL
                    .iter()
                    .map(|range| format!("{} ({})", range.value(), range.abbreviations().join(", ")))
                    .collect();
                format!("{}\nValid ranges are: {}", Message::InvalidDateRange(s.to_string()), valid.join(", "))
            })
    }
}
