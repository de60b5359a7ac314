use crate::api::jira::Project;
use crate::api::tempo::Worklog;
use crate::db::cache::CachedIssue;
use crate::libs::aliases::Aliases;
use crate::libs::budget::{BudgetRow, Emphasis};
use crate::libs::formatter::{format_clock, format_duration_aligned};
use crate::libs::style;
use prettytable::{format, Cell, Row, Table};

pub struct View {}

impl View {
    fn table(titles: &[&str]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(titles.iter().map(|t| Cell::new(t).style_spec("b")).collect()));
        table
    }

    /// Worklogs with the date shown on the first row of each day.
    pub fn worklogs(worklogs: &[Worklog], aliases: &Aliases) -> Table {
        let mut table = Self::table(&["Date", "Time", " ", "Project", "Issue", "Comment"]);
        let mut previous_day = None;
        for worklog in worklogs {
            let day = worklog.day();
            let date = if previous_day == Some(day) { String::new() } else { day.format("%d.%m").to_string() };
            previous_day = Some(day);

            table.add_row(Row::new(vec![
                Cell::new(&date).style_spec("Fc"),
                Cell::new(&format_clock(worklog.started.time())).style_spec("Fc"),
                Cell::new(&format_duration_aligned(worklog.duration(), 2)).style_spec("r"),
                Cell::new(&aliases.display_name(&worklog.issue.key)).style_spec("Fg"),
                Cell::new(&worklog.issue.key).style_spec("Fb"),
                Cell::new(worklog.comment.as_deref().unwrap_or("")),
            ]));
        }
        table
    }

    pub fn issues(issues: &[CachedIssue]) -> Table {
        let mut table = Self::table(&["Key", "Issue"]);
        for issue in issues {
            table.add_row(Row::new(vec![Cell::new(&issue.key).style_spec("rFc"), Cell::new(&issue.summary)]));
        }
        table
    }

    pub fn projects(projects: &[Project]) -> Table {
        let mut table = Self::table(&["Key", "Project"]);
        for project in projects {
            table.add_row(Row::new(vec![Cell::new(&project.key).style_spec("rFc"), Cell::new(&project.name)]));
        }
        table
    }

    pub fn budget(rows: &[BudgetRow]) -> Table {
        let mut table = Self::table(&["", "PT", "Hours", "%"]);
        for row in rows {
            let cells = [row.label.clone(), row.person_days(), row.hours(), row.share.clone()];
            let cells = match row.emphasis {
                Emphasis::Bold => cells.map(|text| style::bold(&text)),
                Emphasis::Dim => cells.map(|text| style::dim(&text)),
            };
            let [label, days, hours, share] = cells;
            table.add_row(Row::new(vec![
                Cell::new(&label).style_spec("rFc"),
                Cell::new(&days),
                Cell::new(&hours).style_spec("r"),
                Cell::new(&share).style_spec("r"),
            ]));
        }
        table
    }
}
