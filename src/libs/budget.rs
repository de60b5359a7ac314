//! Used and remaining time budget of an issue.
//!
//! Rows, top to bottom: the estimate, the time used with the share of the
//! estimate, one row per worklog author with their share of the used time,
//! the remaining estimate, and (if anything remains) the remaining time
//! split among authors by their share.

use crate::api::jira::{JiraWorklog, TimeTracking};
use crate::libs::formatter::format_duration_workdays;

pub const DAY_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Dim,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub label: String,
    pub seconds: i64,
    /// Empty when the row has no share column.
    pub share: String,
    pub emphasis: Emphasis,
}

impl BudgetRow {
    fn new(label: &str, seconds: i64, share: String, emphasis: Emphasis) -> Self {
        Self {
            label: label.to_string(),
            seconds,
            share,
            emphasis,
        }
    }

    /// Person-days column.
    pub fn person_days(&self) -> String {
        format_duration_workdays(self.seconds, DAY_DIGITS)
    }

    /// Whole hours column.
    pub fn hours(&self) -> String {
        format!("{}h", self.seconds / 3600)
    }
}

/// `part` as a percentage of `whole` with one decimal, or `-` for a zero
/// whole.
pub fn percent(part: i64, whole: i64) -> String {
    if whole <= 0 {
        return "-".to_string();
    }
    format!("{:.1}%", part as f64 / whole as f64 * 100.0)
}

/// Seconds per author display name, in order of first appearance.
pub fn per_author(worklogs: &[JiraWorklog]) -> Vec<(String, i64)> {
    let mut authors: Vec<(String, i64)> = Vec::new();
    for worklog in worklogs {
        let name = if worklog.author.display_name.is_empty() {
            worklog.author.name.clone()
        } else {
            worklog.author.display_name.clone()
        };
        match authors.iter_mut().find(|(author, _)| *author == name) {
            Some((_, seconds)) => *seconds += worklog.time_spent_seconds,
            None => authors.push((name, worklog.time_spent_seconds)),
        }
    }
    authors
}

pub fn budget_rows(tracking: &TimeTracking, worklogs: &[JiraWorklog]) -> Vec<BudgetRow> {
    let estimate = tracking.original_estimate_seconds.unwrap_or(0);
    let used = tracking.time_spent_seconds.unwrap_or(0);
    let remaining = tracking.remaining_estimate_seconds.unwrap_or(0);
    let authors = per_author(worklogs);

    let mut rows = vec![
        BudgetRow::new("Estimate", estimate, String::new(), Emphasis::Bold),
        BudgetRow::new("Used (total)", used, percent(used, estimate), Emphasis::Bold),
    ];
    for (author, seconds) in &authors {
        rows.push(BudgetRow::new(author, *seconds, percent(*seconds, used), Emphasis::Dim));
    }
    rows.push(BudgetRow::new("Remaining", remaining, percent(remaining, estimate), Emphasis::Bold));
    if remaining > 0 && used > 0 {
        for (author, seconds) in &authors {
            let share = (remaining as f64 * (*seconds as f64 / used as f64)) as i64;
            rows.push(BudgetRow::new(author, share, String::new(), Emphasis::Dim));
        }
    }
    rows
}
