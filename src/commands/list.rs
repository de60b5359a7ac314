use super::AppContext;
use crate::libs::completions::complete_date_range;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::style;
use crate::libs::time::{parse_date, today, RelativeDateRange};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use clap::Args;
use clap_complete::engine::ArgValueCompleter;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// today (t), yesterday (y), week (w), last-week (lw), month (m), last-month (lm), year (yr), last-year (ly)
    #[arg(default_value = "week", add = ArgValueCompleter::new(complete_date_range))]
    range: RelativeDateRange,

    /// Start of a custom range, e.g. `--from 1.12 --to 24.12`
    #[arg(long = "from", value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// End of a custom range [default: today]
    #[arg(long = "to", value_parser = parse_date)]
    to: Option<NaiveDate>,
}

/// `(from, to)` of a command invocation: a custom range when `--from` is
/// given, the named range otherwise.
pub fn resolve_range(range: RelativeDateRange, from: Option<NaiveDate>, to: Option<NaiveDate>) -> (NaiveDate, NaiveDate, Option<RelativeDateRange>) {
    match from {
        Some(from) => (from, to.unwrap_or_else(today), None),
        None => {
            let (from, to) = range.resolve(today());
            (from, to, Some(range))
        }
    }
}

pub async fn cmd(args: ListArgs, ctx: &AppContext) -> Result<()> {
    let (from, to, _) = resolve_range(args.range, args.from, args.to);
    let worklogs = ctx.tempo.get_worklogs(ctx.worker(), from, to).await?;

    View::worklogs(&worklogs, &ctx.aliases).printstd();

    let total = worklogs.iter().fold(Duration::zero(), |sum, worklog| sum + worklog.duration());
    let summary = Message::LoggedTotal {
        total: style::bold(&format_duration(total)),
        from: from.to_string(),
        to: to.to_string(),
    };
    msg_print!(format!("\n{}", style::italic(&summary.to_string())));
    Ok(())
}
