use super::AppContext;
use crate::libs::view::View;
use anyhow::Result;

pub async fn cmd(ctx: &AppContext) -> Result<()> {
    let projects = ctx.catalog.projects(&ctx.jira).await?;
    View::projects(&projects).printstd();
    Ok(())
}
