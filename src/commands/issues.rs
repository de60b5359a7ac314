use super::AppContext;
use crate::db::cache::CachedIssue;
use crate::libs::completions::complete_project;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;
use clap_complete::engine::ArgValueCompleter;

#[derive(Debug, Args)]
pub struct IssuesArgs {
    /// Project key, or `*` for every cached issue
    #[arg(env = "JIRA_PROJECT", default_value = "*", add = ArgValueCompleter::new(complete_project))]
    project: String,
}

pub async fn cmd(args: IssuesArgs, ctx: &AppContext) -> Result<()> {
    let issues = if args.project == "*" {
        ctx.catalog.all_issues(&ctx.jira).await?
    } else {
        ctx.jira.project_issues(&args.project).await?.iter().map(CachedIssue::from).collect()
    };

    View::issues(&issues).printstd();
    Ok(())
}
