pub mod alias;
pub mod budget;
pub mod config;
pub mod init;
pub mod issues;
pub mod list;
pub mod log;
pub mod projects;
pub mod reset;
pub mod stats;

use crate::api::jira::{Jira, JiraUser, DEFAULT_INSTANCE};
use crate::api::tempo::Tempo;
use crate::api::{Session, TokenSource};
use crate::libs::aliases::{Aliases, ALIASES_FILE_NAME};
use crate::libs::catalog::Catalog;
use crate::libs::config::{self as lt_config, Config, ConfigOption, Scope};
use crate::libs::data_storage::DataStorage;
use crate::libs::logging::init_cli_logger;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use clap::{ArgAction, Command, CommandFactory, Parser, Subcommand};
use clap_complete::CompleteEnv;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::IsTerminal;
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Log time entry")]
    Log(log::LogArgs),
    #[command(about = "Log multiple time entries at once, e.g. `lt logm opt:2h,project:5h30m,admin:30m`")]
    Logm(log::LogmArgs),
    #[command(about = "List time entries")]
    List(list::ListArgs),
    #[command(about = "Show logged time per project")]
    Stats(stats::StatsArgs),
    #[command(about = "List issues")]
    Issues(issues::IssuesArgs),
    #[command(about = "List projects")]
    Projects,
    #[command(about = "Show used and remaining time budget of an issue")]
    Budget(budget::BudgetArgs),
    #[command(about = "Update local caches")]
    Init(init::InitArgs),
    #[command(about = "Interact with configuration")]
    Config(config::ConfigArgs),
    #[command(about = "Clear local cache and configuration values")]
    Reset(reset::ResetArgs),
    #[command(about = "Create an alias for an issue")]
    Alias(alias::AliasArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Log time to tempo.", long_about = None)]
pub struct Cli {
    /// Jira personal access token [default: token store or prompt]
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "JIRA_INSTANCE", default_value = DEFAULT_INSTANCE)]
    instance: String,

    /// Show logging output (-vv for debug output)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(long, hide = true)]
    no_persist_token: bool,

    #[arg(long, hide = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Everything a Jira-backed command needs.
pub struct AppContext {
    pub jira: Jira,
    pub tempo: Tempo,
    pub myself: JiraUser,
    pub aliases: Aliases,
    pub catalog: Catalog,
    pub verbose: u8,
}

impl AppContext {
    /// Worker key under which Tempo stores the user's worklogs.
    pub fn worker(&self) -> &str {
        &self.myself.key
    }

    /// Whether prompts can be answered.
    pub fn interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }
}

/// Yes/no question on the terminal.
pub fn confirm(message: Message, default: bool) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Command tree for shell completion, named after the started binary.
fn completion_command() -> Command {
    let command = Cli::command();
    let bin_name = std::env::args_os()
        .next()
        .and_then(|arg| Path::new(&arg).file_stem().map(|stem| stem.to_string_lossy().into_owned()));
    match bin_name {
        Some(bin_name) => command.bin_name(bin_name),
        None => command,
    }
}

impl Cli {
    pub async fn menu() -> Result<()> {
        CompleteEnv::with_factory(completion_command).complete();
        let config = lt_config::load()?;
        let mut cli = Self::parse();
        init_cli_logger(cli.verbose);

        let storage = DataStorage::new();
        let aliases_path = storage.get_path(ALIASES_FILE_NAME)?;
        let aliases = Aliases::read(&aliases_path)?;

        let Some(command) = cli.command.take() else {
            Self::command().print_help()?;
            return Ok(());
        };

        match command {
            Commands::Config(args) => config::cmd(args, &config),
            Commands::Reset(args) => reset::cmd(args, &config, &storage),
            Commands::Alias(args) => alias::cmd(args, aliases, &aliases_path),
            command => {
                let is_init = matches!(command, Commands::Init(_));
                let ctx = cli.connect(aliases, &config, &storage).await?;
                if ctx.catalog.uses_cache() && !is_init && !ctx.catalog.is_warm() {
                    msg_info!(Message::CacheCold);
                    init::refresh(&ctx).await?;
                }
                Self::run(command, &ctx).await
            }
        }
    }

    async fn run(command: Commands, ctx: &AppContext) -> Result<()> {
        match command {
            Commands::Log(args) => log::cmd(args, ctx).await,
            Commands::Logm(args) => log::cmd_multi(args, ctx).await,
            Commands::List(args) => list::cmd(args, ctx).await,
            Commands::Stats(args) => stats::cmd(args, ctx).await,
            Commands::Issues(args) => issues::cmd(args, ctx).await,
            Commands::Projects => projects::cmd(ctx).await,
            Commands::Budget(args) => budget::cmd(args, ctx).await,
            Commands::Init(args) => init::cmd(args, ctx).await,
            Commands::Config(_) | Commands::Reset(_) | Commands::Alias(_) => Ok(()),
        }
    }

    /// Authenticates against Jira, remembers the user and persists the token.
    async fn connect(&self, aliases: Aliases, config: &Config, storage: &DataStorage) -> Result<AppContext> {
        let configured_user = std::env::var(ConfigOption::JiraUser.key()).ok();
        let mut jira = Jira::new(&self.instance, configured_user)?;
        let login = jira.authenticate(self.token.clone()).await?;
        jira.set_token(&login.token);

        let path = config.set(Scope::Both, ConfigOption::JiraUser, &login.user.name)?;
        msg_debug!(Message::ConfigKeySet {
            key: ConfigOption::JiraUser.to_string(),
            path: path.display().to_string(),
        });

        if !self.no_persist_token && login.source != TokenSource::Stored {
            let secret = Secret::at(storage.get_path(&Secret::file_name(&login.user.name))?);
            secret.store(&login.token)?;
            msg_info!(Message::TokenSaved(login.user.name.clone()));
        }
        msg_debug!(Message::LoggedInAs(login.user.name.clone()));

        let tempo = Tempo::new(jira.http().clone());
        Ok(AppContext {
            jira,
            tempo,
            myself: login.user,
            aliases,
            catalog: Catalog::new(storage.cache_dir(), !self.no_cache),
            verbose: self.verbose,
        })
    }
}
