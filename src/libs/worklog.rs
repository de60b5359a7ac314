//! Planning a new worklog against the worklogs already logged that day.
//!
//! Start time precedence:
//!
//! 1. an explicit `--start`
//! 2. the end of the last worklog of the day
//! 3. `LT_LOG_START` (default `9`)
//!
//! `--end` replaces the duration, `--lunch` is taken off both duration and
//! end. The result carries the overlaps to warn about and whether the daily
//! limit would be exceeded.

use crate::api::tempo::Worklog;
use crate::libs::formatter::{format_clock, format_date_relative_to, format_duration};
use crate::libs::messages::Message;
use crate::libs::style;
use crate::libs::time::parse_duration;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Most time that may be logged on a single day.
pub const DAILY_LIMIT_HOURS: i64 = 10;
pub const DEFAULT_START: &str = "9";

#[derive(Debug, Clone, PartialEq)]
pub struct LogRequest {
    pub day: NaiveDate,
    pub duration: Duration,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub lunch: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogPlan {
    pub started: NaiveDateTime,
    pub ended: NaiveDateTime,
    pub duration: Duration,
    /// Time already logged on the day.
    pub logged: Duration,
    /// `(start, end)` of existing worklogs overlapping the new one.
    pub overlaps: Vec<(NaiveDateTime, NaiveDateTime)>,
}

impl LogPlan {
    pub fn exceeds_daily_limit(&self) -> bool {
        self.logged + self.duration > Duration::hours(DAILY_LIMIT_HOURS)
    }

    pub fn check_daily_limit(&self) -> Result<()> {
        if self.exceeds_daily_limit() {
            msg_bail_anyhow!(Message::DailyLimitExceeded(format_duration(self.logged)));
        }
        Ok(())
    }

    pub fn overlap_warnings(&self) -> Vec<Message> {
        self.overlaps
            .iter()
            .map(|(from, to)| Message::OverlapWarning {
                from: format_clock(from.time()),
                to: format_clock(to.time()),
            })
            .collect()
    }
}

/// Plans `request` given the day's `existing` worklogs ordered by start.
pub fn plan(request: &LogRequest, existing: &[Worklog], default_start: NaiveTime) -> Result<LogPlan> {
    let logged = existing.iter().fold(Duration::zero(), |sum, worklog| sum + worklog.duration());

    let start = match (request.start, existing.last()) {
        (Some(start), _) => start,
        (None, Some(last)) => last.ended().time(),
        (None, None) => default_start,
    };
    let started = request.day.and_time(start);

    let mut duration = match request.end {
        Some(end) => {
            let duration = request.day.and_time(end) - started;
            if duration <= Duration::zero() {
                msg_bail_anyhow!(Message::EndBeforeStart {
                    start: format_clock(start),
                    end: format_clock(end),
                });
            }
            duration
        }
        None => request.duration,
    };
    if let Some(lunch) = request.lunch {
        duration = duration - lunch;
    }
    if duration <= Duration::zero() {
        msg_bail_anyhow!(Message::NonPositiveDuration(format_duration(duration)));
    }
    let Some(ended) = started.checked_add_signed(duration) else {
        msg_bail_anyhow!(Message::DurationTooLong(format_duration(duration)));
    };

    let overlaps = existing
        .iter()
        .filter(|worklog| worklog.started < ended && worklog.ended() > started)
        .map(|worklog| (worklog.started, worklog.ended()))
        .collect();

    Ok(LogPlan {
        started,
        ended,
        duration,
        logged,
        overlaps,
    })
}

/// `Log 1h 30m (09:00 - 10:30) on opt (ABC-1: summary) for today`
pub fn summary_line(plan: &LogPlan, issue_key: &str, summary: &str, alias: Option<&str>, today: NaiveDate) -> String {
    let target = match alias {
        Some(alias) => format!("{} ({}: {})", alias, issue_key, summary),
        None => format!("{} ({})", issue_key, summary),
    };
    format!(
        "Log {} ({} - {}) on {} for {}",
        format_duration(plan.duration),
        format_clock(plan.started.time()),
        format_clock(plan.ended.time()),
        style::italic(&target),
        format_date_relative_to(plan.started.date(), today)
    )
}

/// Splits `issue:duration` entries separated by commas. Empty entries are
/// skipped.
pub fn parse_entries(entries: &str) -> Result<Vec<(String, Duration)>> {
    entries
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let invalid = || msg_error_anyhow!(Message::InvalidEntry(entry.to_string()));
            let (issue, duration) = entry.split_once(':').ok_or_else(invalid)?;
            let issue = issue.trim();
            if issue.is_empty() {
                return Err(invalid());
            }
            let duration = parse_duration(duration).map_err(|_| invalid())?;
            Ok((issue.to_string(), duration))
        })
        .collect()
}
