//! Human-readable rendering of durations and dates.
//!
//! ## Formats
//!
//! - [`format_duration`]: compact, for sentences (`1h 30m`, `8h`, `45m`)
//! - [`format_duration_aligned`]: fixed width, for columns (` 8h 30m`, ` 8h    `)
//! - [`format_duration_workdays`]: person-days of 8 hours (` 3d 4h`)
//! - [`format_clock`]: wall-clock time (`09:30`)
//! - [`format_date_relative_to`]: `today`, `yesterday`, `Monday, 13.10.`, `Mon 01.09.2025`
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Duration;
//! use log_time_to_tempo::libs::formatter::{format_duration, format_duration_aligned};
//!
//! assert_eq!(format_duration(Duration::minutes(90)), "1h 30m");
//! assert_eq!(format_duration_aligned(Duration::hours(8), 2), " 8h    ");
//! ```

use chrono::{Duration, NaiveDate, NaiveTime};

/// Hours in a person-day.
pub const WORKDAY_HOURS: i64 = 8;

pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.abs();
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    match (hours, minutes) {
        (0, m) => format!("{}{}m", sign, m),
        (h, 0) => format!("{}{}h", sign, h),
        (h, m) => format!("{}{}h {}m", sign, h, m),
    }
}

/// Fixed-width duration so that columns of durations line up.
///
/// Negative durations are shown as zero. The hour part is padded to
/// `hour_digits`; minutes always take four characters (` 30m` or blanks).
pub fn format_duration_aligned(duration: Duration, hour_digits: usize) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    let hours_part = if hours > 0 || minutes == 0 {
        format!("{:>width$}h", hours, width = hour_digits)
    } else {
        " ".repeat(hour_digits + 1)
    };
    let minutes_part = if minutes > 0 { format!(" {:>2}m", minutes) } else { "    ".to_string() };

    format!("{}{}", hours_part, minutes_part)
}

/// Person-days of [`WORKDAY_HOURS`] plus remaining hours, and minutes if any.
pub fn format_duration_workdays(seconds: i64, max_day_digits: usize) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.abs();
    let day_seconds = WORKDAY_HOURS * 3600;
    let days = seconds / day_seconds;
    let hours = (seconds % day_seconds) / 3600;
    let minutes = (seconds % 3600) / 60;

    let mut text = format!("{:>width$}d {}h", format!("{}{}", sign, days), hours, width = max_day_digits);
    if minutes > 0 {
        text.push_str(&format!(" {}m", minutes));
    }
    text
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_date_relative_to(day: NaiveDate, today: NaiveDate) -> String {
    match (today - day).num_days() {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        -1 => "tomorrow".to_string(),
        2..=6 => day.format("%A, %d.%m.").to_string(),
        _ => day.format("%a %d.%m.%Y").to_string(),
    }
}
