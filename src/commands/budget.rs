use super::AppContext;
use crate::libs::budget::budget_rows;
use crate::libs::completions::complete_issue;
use crate::libs::messages::Message;
use crate::libs::style;
use crate::libs::time::today;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::Duration;
use clap::Args;
use clap_complete::engine::ArgValueCompleter;

/// How far back `budget` looks for the last booked issue.
const RECENT_DAYS: i64 = 30;

#[derive(Debug, Args)]
pub struct BudgetArgs {
    /// Issue key or alias [default: last booked on]
    #[arg(env = "JIRA_ISSUE", default_value = "*", add = ArgValueCompleter::new(complete_issue))]
    issue: String,
}

pub async fn cmd(args: BudgetArgs, ctx: &AppContext) -> Result<()> {
    let input = if args.issue == "*" { last_booked_issue(ctx).await? } else { args.issue };
    let (key, _) = ctx.aliases.resolve(&input);

    let issue = ctx.jira.issue(&key, "summary,timetracking").await?;
    let worklogs = ctx.jira.issue_worklogs(&issue.key).await?;
    let tracking = issue.fields.timetracking.unwrap_or_default();

    View::budget(&budget_rows(&tracking, &worklogs)).printstd();
    Ok(())
}

/// Issue of the most recently started worklog of the last days.
async fn last_booked_issue(ctx: &AppContext) -> Result<String> {
    let to = today();
    let from = to - Duration::days(RECENT_DAYS);
    let worklogs = ctx.tempo.get_worklogs(ctx.worker(), from, to).await?;

    let Some(latest) = worklogs.iter().max_by_key(|worklog| worklog.started) else {
        msg_bail_anyhow!(Message::NoRecentWorklogs);
    };
    let key = latest.issue.key.clone();
    let shown = match ctx.aliases.alias_for(&key) {
        Some(alias) => format!("{} ({})", alias, key),
        None => key.clone(),
    };
    msg_print!(style::dim(&Message::ShowingBudgetFor(shown).to_string()));
    Ok(key)
}
