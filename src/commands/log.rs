use super::{confirm, AppContext};
use crate::api::jira::JiraIssue;
use crate::api::tempo::NewWorklog;
use crate::api::ApiError;
use crate::libs::completions::complete_issue;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::suggest::{suggest_issues, Suggestion};
use crate::libs::time::{parse_date, parse_duration, parse_time, today};
use crate::libs::worklog::{self, LogRequest, DEFAULT_START};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveTime};
use clap::Args;
use clap_complete::engine::ArgValueCompleter;
use dialoguer::{theme::ColorfulTheme, Select};

const ISSUE_FIELDS: &str = "summary,comment";

#[derive(Debug, Args)]
pub struct LogArgs {
    /// e.g. 8, 1.5, 2h, 1h30m or 1:30
    #[arg(env = "LT_LOG_DURATION", default_value = "8", value_parser = parse_duration)]
    duration: Duration,

    /// Issue key or alias
    #[arg(env = "LT_LOG_ISSUE", default_value = "TSI-7", add = ArgValueCompleter::new(complete_issue))]
    issue: String,

    /// Day to log on [default: today]
    #[arg(long, value_parser = parse_date)]
    day: Option<NaiveDate>,

    /// [default: end of the last worklog of the day, or LT_LOG_START, or 9]
    #[arg(long, value_parser = parse_time)]
    start: Option<NaiveTime>,

    /// Log until this time instead of for DURATION
    #[arg(long, value_parser = parse_time)]
    end: Option<NaiveTime>,

    /// Break to subtract from duration and end
    #[arg(long, value_parser = parse_duration)]
    lunch: Option<Duration>,

    #[arg(short, long, env = "LT_LOG_MESSAGE")]
    message: Option<String>,

    /// Log time without confirmation
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
pub struct LogmArgs {
    /// Comma separated issue:duration pairs, e.g. opt:2h,project:5h30m,admin:30m
    entries: String,

    /// Day to log on [default: today]
    #[arg(long, value_parser = parse_date)]
    day: Option<NaiveDate>,

    /// Start of the first entry
    #[arg(long, value_parser = parse_time)]
    start: Option<NaiveTime>,

    #[arg(short, long, env = "LT_LOG_MESSAGE")]
    message: Option<String>,

    /// Log time without confirmation
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: LogArgs, ctx: &AppContext) -> Result<()> {
    let request = LogRequest {
        day: args.day.unwrap_or_else(today),
        duration: args.duration,
        start: args.start,
        end: args.end,
        lunch: args.lunch,
    };
    log_entry(ctx, &args.issue, &request, args.message.as_deref(), args.yes).await
}

/// Logs each entry in turn. Entries after the first start where the
/// previous worklog ended.
pub async fn cmd_multi(args: LogmArgs, ctx: &AppContext) -> Result<()> {
    let entries = worklog::parse_entries(&args.entries)?;
    let day = args.day.unwrap_or_else(today);

    for (index, (issue, duration)) in entries.iter().enumerate() {
        let request = LogRequest {
            day,
            duration: *duration,
            start: if index == 0 { args.start } else { None },
            end: None,
            lunch: None,
        };
        log_entry(ctx, issue, &request, args.message.as_deref(), args.yes).await?;
    }
    Ok(())
}

async fn log_entry(ctx: &AppContext, input: &str, request: &LogRequest, message: Option<&str>, yes: bool) -> Result<()> {
    let Some((issue, alias)) = find_issue(ctx, input).await? else {
        return Ok(());
    };

    let worklogs = ctx.tempo.get_worklogs(ctx.worker(), request.day, request.day).await?;
    let default_start = std::env::var("LT_LOG_START").unwrap_or_else(|_| DEFAULT_START.to_string());
    let plan = worklog::plan(request, &worklogs, parse_time(&default_start)?)?;

    for warning in plan.overlap_warnings() {
        msg_warning!(warning);
    }
    msg_print!(worklog::summary_line(&plan, &issue.key, &issue.fields.summary, alias.as_deref(), today()));
    plan.check_daily_limit()?;

    if yes || confirm(Message::ConfirmContinue, false)? {
        let new_worklog = NewWorklog::new(ctx.worker(), &issue.id, plan.started, plan.duration, message.map(str::to_string));
        ctx.tempo.create_worklog(&new_worklog).await?;
        msg_info!(Message::WorklogCreated {
            duration: format_duration(plan.duration),
            issue: issue.key.clone(),
        });
    }
    Ok(())
}

/// Looks the issue up on Jira, resolving aliases and offering suggestions for
/// unknown issues. `None` means the user declined every suggestion.
async fn find_issue(ctx: &AppContext, input: &str) -> Result<Option<(JiraIssue, Option<String>)>> {
    let mut input = input.to_string();
    loop {
        let (key, alias) = ctx.aliases.resolve(&input);
        let error = match ctx.jira.issue(&key, ISSUE_FIELDS).await {
            Ok(issue) => return Ok(Some((issue, alias))),
            Err(ApiError::NotFound(error)) => error,
            Err(e) => return Err(e.into()),
        };

        let issues: Vec<(String, String)> = match ctx.catalog.all_issues(&ctx.jira).await {
            Ok(issues) => issues.into_iter().map(|i| (i.key, i.summary)).collect(),
            Err(e) => {
                tracing::debug!("No issue summaries for suggestions: {}", e);
                Vec::new()
            }
        };
        let suggestions = suggest_issues(&key, &ctx.aliases, &issues);
        let not_found = Message::IssueNotFound { error, issue: key.clone() };

        match pick_suggestion(ctx, &suggestions, &not_found)? {
            Some(suggestion) => input = suggestion,
            None => return Ok(None),
        }
    }
}

fn pick_suggestion(ctx: &AppContext, suggestions: &[Suggestion], not_found: &Message) -> Result<Option<String>> {
    if suggestions.is_empty() {
        msg_bail_anyhow!(not_found);
    }
    if !ctx.interactive() {
        let keys: Vec<&str> = suggestions.iter().map(|s| s.key.as_str()).collect();
        return Err(msg_error_anyhow!(format!("{}\n{}", not_found, Message::DidYouMeanList(keys.join(", ")))));
    }

    if let [suggestion] = suggestions {
        let question = Message::DidYouMean {
            key: suggestion.key.clone(),
            summary: suggestion.summary.clone(),
        };
        return Ok(confirm(question, true)?.then(|| suggestion.key.clone()));
    }

    let mut items: Vec<String> = suggestions.iter().map(|s| format!("{} ({})", s.key, s.summary)).collect();
    items.push(Message::SelectCancel.to_string());
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}\n{}", not_found, Message::SelectIssue))
        .items(&items)
        .default(0)
        .interact()?;

    Ok(suggestions.get(selection).map(|s| s.key.clone()))
}
