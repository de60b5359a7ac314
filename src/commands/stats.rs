use super::list::resolve_range;
use super::AppContext;
use crate::libs::completions::complete_date_range;
use crate::libs::messages::Message;
use crate::libs::stats::{aggregate, period_label, render};
use crate::libs::style;
use crate::libs::time::{parse_date, RelativeDateRange};
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, Args};
use clap_complete::engine::ArgValueCompleter;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// today (t), yesterday (y), week (w), last-week (lw), month (m), last-month (lm), year (yr), last-year (ly)
    #[arg(default_value = "month", add = ArgValueCompleter::new(complete_date_range))]
    range: RelativeDateRange,

    /// Start of a custom range, e.g. `--from 1.12 --to 24.12`
    #[arg(long = "from", value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// End of a custom range [default: today]
    #[arg(long = "to", value_parser = parse_date)]
    to: Option<NaiveDate>,

    /// List each day with its comments
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,

    /// Show a sparkline of daily hours (default)
    #[arg(long, overrides_with = "no_sparkline")]
    sparkline: bool,

    #[arg(long, overrides_with = "sparkline")]
    no_sparkline: bool,
}

impl StatsArgs {
    fn show_sparkline(&self) -> bool {
        self.sparkline || !self.no_sparkline
    }
}

pub async fn cmd(args: StatsArgs, ctx: &AppContext) -> Result<()> {
    let (from, to, range) = resolve_range(args.range, args.from, args.to);
    msg_print!(style::bold(&Message::Period(period_label(range, from, to)).to_string()));

    let worklogs = ctx.tempo.get_worklogs(ctx.worker(), from, to).await?;
    let projects = aggregate(&worklogs, &ctx.aliases);
    let verbose = args.verbose > 0 || ctx.verbose > 0;

    for line in render(&projects, from, to, verbose, args.show_sparkline()) {
        msg_print!(line);
    }
    Ok(())
}
