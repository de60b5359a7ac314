use super::confirm;
use crate::libs::aliases::Aliases;
use crate::libs::completions::complete_issue;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use clap_complete::engine::ArgValueCompleter;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::Path;

#[derive(Debug, Args)]
pub struct AliasArgs {
    /// Short name; without it all aliases are listed
    alias: Option<String>,

    /// Issue key the alias stands for [default: prompt]
    #[arg(add = ArgValueCompleter::new(complete_issue))]
    issue: Option<String>,
}

pub fn cmd(args: AliasArgs, mut aliases: Aliases, path: &Path) -> Result<()> {
    let Some(alias) = args.alias else {
        if !aliases.is_empty() {
            msg_print!(aliases.listing());
        }
        return Ok(());
    };

    if let Some(existing) = aliases.get(&alias) {
        let question = Message::AliasExists {
            alias: alias.clone(),
            issue: existing.to_string(),
        };
        if !confirm(question, false)? {
            return Ok(());
        }
    }

    let issue = match args.issue {
        Some(issue) => issue,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAliasIssue.to_string())
            .interact_text()?,
    };

    aliases.insert(&alias, &issue);
    aliases.write(path)?;
    msg_print!(Message::AliasCreated { alias, issue });
    Ok(())
}
