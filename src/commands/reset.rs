use super::config::unset_all;
use super::confirm;
use crate::db::cache;
use crate::libs::config::{Config, ConfigOption, Scope};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Delete everything immediately (without confirmation)
    #[arg(short, long)]
    force: bool,
}

/// Removes the cache, the stored token of `JIRA_USER` and the configuration.
pub fn cmd(args: ResetArgs, config: &Config, storage: &DataStorage) -> Result<()> {
    if args.force || confirm(Message::ConfirmDeleteCache, false)? {
        cache::clear(&storage.cache_dir())?;
        msg_print!(Message::CacheReset);
    }

    if args.force || confirm(Message::ConfirmDeleteToken, false)? {
        match std::env::var(ConfigOption::JiraUser.key()) {
            Ok(user) if !user.is_empty() => {
                let secret = Secret::at(storage.base_path().join(Secret::file_name(&user)));
                if secret.delete()? {
                    msg_print!(Message::TokenRemoved);
                } else {
                    msg_info!(Message::NoTokenToDelete);
                }
            }
            _ => {
                msg_info!(Message::NoUserForToken);
            }
        }
    }

    unset_all(&config.files(Scope::Both), args.force)
}
