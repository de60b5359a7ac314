//! Refreshes the local project and issue cache.
//!
//! Run this when a new project or issue doesn't show up in `projects`,
//! `issues` or the suggestions of `log`.

use super::AppContext;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Leave the local caches untouched
    #[arg(long)]
    no_cache: bool,
}

pub async fn cmd(args: InitArgs, ctx: &AppContext) -> Result<()> {
    if args.no_cache {
        return Ok(());
    }
    refresh(ctx).await
}

/// Fetches projects and issues from Jira into the cache.
pub async fn refresh(ctx: &AppContext) -> Result<()> {
    ctx.catalog.update_projects(&ctx.jira).await?;
    msg_print!(Message::ProjectCacheUpdated);
    ctx.catalog.update_issues(&ctx.jira).await?;
    msg_print!(Message::IssueCacheUpdated);
    Ok(())
}
