//! Logged time per project and day.
//!
//! A "project" here is what the user calls an issue: its alias if it has
//! one, otherwise its key.

use crate::api::tempo::Worklog;
use crate::libs::aliases::Aliases;
use crate::libs::formatter::format_duration_aligned;
use crate::libs::sparkline::{determine_date_range_type, generate_axis_labels, generate_sparkline_from_daily_data};
use crate::libs::style;
use crate::libs::time::RelativeDateRange;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

pub const MAX_COL_WIDTH: usize = 20;
/// Wide enough for the `Total` line.
pub const MIN_COL_WIDTH: usize = 5;
pub const SEPARATOR_WIDTH: usize = 15;
/// Hours that fill a sparkline bar.
pub const SPARKLINE_MAX_HOURS: f64 = 8.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayStats {
    pub seconds: i64,
    /// Distinct comments in order of appearance.
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStats {
    pub name: String,
    pub seconds: i64,
    pub days: BTreeMap<NaiveDate, DayStats>,
}

impl ProjectStats {
    pub fn daily_seconds(&self) -> BTreeMap<NaiveDate, i64> {
        self.days.iter().map(|(day, stats)| (*day, stats.seconds)).collect()
    }
}

/// Groups worklogs by project, largest total first. Projects with equal
/// totals keep the order in which they first appear.
pub fn aggregate(worklogs: &[Worklog], aliases: &Aliases) -> Vec<ProjectStats> {
    let mut projects: Vec<ProjectStats> = Vec::new();
    for worklog in worklogs {
        let name = aliases.display_name(&worklog.issue.key);
        let index = match projects.iter().position(|p| p.name == name) {
            Some(index) => index,
            None => {
                projects.push(ProjectStats {
                    name,
                    seconds: 0,
                    days: BTreeMap::new(),
                });
                projects.len() - 1
            }
        };
        let project = &mut projects[index];
        project.seconds += worklog.time_spent_seconds;

        let day = project.days.entry(worklog.day()).or_default();
        day.seconds += worklog.time_spent_seconds;
        if let Some(comment) = worklog.comment.as_deref().filter(|c| !c.is_empty()) {
            if !day.comments.iter().any(|c| c == comment) {
                day.comments.push(comment.to_string());
            }
        }
    }
    projects.sort_by(|a, b| b.seconds.cmp(&a.seconds));
    projects
}

pub fn total_seconds(projects: &[ProjectStats]) -> i64 {
    projects.iter().map(|p| p.seconds).sum()
}

/// Width of the project column: the longest name, clamped to
/// `MIN_COL_WIDTH..=MAX_COL_WIDTH`.
pub fn column_width(projects: &[ProjectStats]) -> usize {
    let longest = projects.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);
    longest.clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
}

/// Pads `name` to `width`, or cuts it to `width` ending in `..`.
pub fn fit_name(name: &str, width: usize) -> String {
    if name.chars().count() > width {
        let kept: String = name.chars().take(width.saturating_sub(2)).collect();
        format!("{}..", kept)
    } else {
        format!("{:<width$}", name, width = width)
    }
}

/// Digits needed for the hours of the largest duration, at least two.
pub fn hour_digits(seconds: i64) -> usize {
    (seconds / 3600).max(0).to_string().len().max(2)
}

pub fn period_label(range: Option<RelativeDateRange>, from: NaiveDate, to: NaiveDate) -> String {
    match range {
        Some(range) => range.value().to_string(),
        None if from == to => from.to_string(),
        None => format!("{} - {}", from, to),
    }
}

/// Renders the statistics lines below the `Period:` header.
pub fn render(projects: &[ProjectStats], from: NaiveDate, to: NaiveDate, verbose: bool, show_sparkline: bool) -> Vec<String> {
    let total = total_seconds(projects);
    let digits = hour_digits(total);
    let width = column_width(projects);
    let mut lines = Vec::new();

    for project in projects {
        let duration = format_duration_aligned(Duration::seconds(project.seconds), digits);
        if show_sparkline {
            let sparkline = generate_sparkline_from_daily_data(
                &project.daily_seconds(),
                from,
                to,
                Some(SPARKLINE_MAX_HOURS),
                Some(0.0),
            );
            lines.push(format!(
                "{}  {}",
                style::bold(&format!("{}  {}", duration, fit_name(&project.name, width))),
                style::cyan(&sparkline)
            ));
        } else {
            lines.push(style::bold(&format!("{}  {}", duration, project.name)));
        }

        if verbose {
            for (day, stats) in &project.days {
                let spent = format_duration_aligned(Duration::seconds(stats.seconds), digits);
                lines.push(style::dim(&format!(
                    "          {} {}  {}",
                    day.format("%d.%m"),
                    spent,
                    stats.comments.join("; ")
                )));
            }
        }
    }

    lines.push("-".repeat(SEPARATOR_WIDTH));
    let total = format_duration_aligned(Duration::seconds(total), digits);
    let axis = if show_sparkline && !projects.is_empty() {
        generate_axis_labels(from, to, determine_date_range_type(from, to))
    } else {
        String::new()
    };
    if axis.is_empty() {
        lines.push(style::bold(&format!("{}  Total", total)));
    } else {
        lines.push(format!(
            "{}{}",
            style::bold(&format!("{}  {}", total, fit_name("Total", width))),
            style::dim(&format!("  {}", axis))
        ));
    }
    lines
}
