//! `lt config`: read and write the `.lt` configuration files.
//!
//! | invocation              | effect                                               |
//! |-------------------------|------------------------------------------------------|
//! | `config KEY VALUE`      | write to the first selected file                     |
//! | `config KEY`            | print the value from the first file that has it     |
//! | `config KEY --unset`    | remove it from the first file that has it           |
//! | `config`                | print the merged configuration as JSON              |
//! | `config --unset [-f]`   | delete the selected files                           |
//!
//! `--system` selects the system file, `--local` the closest local file (or
//! `./.lt`); without either the closest local file and the system file are
//! used, local first.

use super::confirm;
use crate::libs::completions::complete_config_option;
use crate::libs::config::{Config, ConfigOption, DotenvFile, Scope};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use clap_complete::engine::ArgValueCompleter;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Read or update this configuration option
    #[arg(add = ArgValueCompleter::new(complete_config_option))]
    key: Option<ConfigOption>,

    /// Update the option with this value
    value: Option<String>,

    /// Only use the system configuration
    #[arg(long, conflicts_with = "local")]
    system: bool,

    /// Only use the closest local configuration
    #[arg(long)]
    local: bool,

    /// Remove configuration
    #[arg(long)]
    unset: bool,

    /// Delete configuration immediately (without confirmation)
    #[arg(short, long)]
    force: bool,
}

impl ConfigArgs {
    fn scope(&self) -> Scope {
        match (self.system, self.local) {
            (true, _) => Scope::System,
            (_, true) => Scope::Local,
            _ => Scope::Both,
        }
    }
}

pub fn cmd(args: ConfigArgs, config: &Config) -> Result<()> {
    let files = config.files(args.scope());

    let Some(key) = args.key else {
        return if args.unset { unset_all(&files, args.force) } else { show_all(&files) };
    };

    if let Some(value) = &args.value {
        let path = config.set(args.scope(), key, value)?;
        msg_debug!(Message::ConfigKeySet {
            key: key.to_string(),
            path: path.display().to_string(),
        });
        return Ok(());
    }

    if args.unset {
        if let Some(path) = unset_value(&files, key)? {
            msg_info!(Message::ConfigUnsetting {
                key: key.to_string(),
                path: path.display().to_string(),
            });
        }
    } else if let Some((_, value)) = get_value(&files, key)? {
        msg_print!(value);
    }
    Ok(())
}

/// Value of `key` from the first file in `files` that has it.
pub fn get_value(files: &[PathBuf], key: ConfigOption) -> Result<Option<(PathBuf, String)>> {
    for path in files {
        if let Some(value) = DotenvFile::new(path).get(key.key())? {
            return Ok(Some((path.clone(), value)));
        }
    }
    Ok(None)
}

/// Removes `key` from the first file in `files` that has it and returns that
/// file. Later files keep their value.
pub fn unset_value(files: &[PathBuf], key: ConfigOption) -> Result<Option<PathBuf>> {
    let Some((path, _)) = get_value(files, key)? else {
        return Ok(None);
    };
    DotenvFile::new(&path).unset(key.key())?;
    Ok(Some(path))
}

fn show_all(files: &[PathBuf]) -> Result<()> {
    let merged = Config::merged(files)?;
    if merged.is_empty() {
        msg_warning!(Message::NoConfigFound);
    } else {
        msg_print!(serde_json::to_string_pretty(&merged)?);
    }
    Ok(())
}

/// Deletes every existing file in `files`, asking first unless `force`.
pub fn unset_all(files: &[PathBuf], force: bool) -> Result<()> {
    for path in files {
        let file = DotenvFile::new(path);
        if !file.exists() {
            continue;
        }
        if !force {
            msg_print!(serde_json::to_string_pretty(&file.values()?)?);
        }
        if force || confirm(Message::ConfirmDeleteConfig(path.display().to_string()), false)? {
            file.delete()?;
            msg_print!(Message::ConfigReset);
        }
    }
    Ok(())
}
