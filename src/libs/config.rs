//! Layered configuration in dotenv files.
//!
//! Two files named `.lt` are consulted:
//!
//! - **local**: the closest `.lt` found walking up from the working directory
//! - **system**: `.lt` in the application directory (see [`DataStorage`])
//!
//! Loading puts their values into the process environment without overriding
//! variables that are already set, local first. Because clap reads option
//! defaults from the environment, a config value like `LT_LOG_ISSUE=ABC-1`
//! becomes the default of `lt log`'s issue argument.
//!
//! ```text
//! explicit argument > environment > local .lt > system .lt > built-in default
//! ```
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use log_time_to_tempo::libs::config::{Config, ConfigOption, Scope};
//!
//! let config = Config::discover()?;
//! config.load();
//! let target = &config.files(Scope::Both)[0];
//! log_time_to_tempo::libs::config::DotenvFile::new(target).set(ConfigOption::LtLogIssue.key(), "ABC-1")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of both the local and the system configuration file.
pub const CONFIG_FILE_NAME: &str = ".lt";

/// Keys that `lt config` reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigOption {
    JiraInstance,
    JiraUser,
    LtLogIssue,
    LtLogStart,
    LtLogMessage,
    LtLogDuration,
}

impl ConfigOption {
    pub const ALL: [ConfigOption; 6] = [
        ConfigOption::JiraInstance,
        ConfigOption::JiraUser,
        ConfigOption::LtLogIssue,
        ConfigOption::LtLogStart,
        ConfigOption::LtLogMessage,
        ConfigOption::LtLogDuration,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ConfigOption::JiraInstance => "JIRA_INSTANCE",
            ConfigOption::JiraUser => "JIRA_USER",
            ConfigOption::LtLogIssue => "LT_LOG_ISSUE",
            ConfigOption::LtLogStart => "LT_LOG_START",
            ConfigOption::LtLogMessage => "LT_LOG_MESSAGE",
            ConfigOption::LtLogDuration => "LT_LOG_DURATION",
        }
    }

    pub fn valid_options() -> String {
        ConfigOption::ALL.iter().map(|option| format!("'{}'", option.key())).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ConfigOption {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        ConfigOption::ALL.into_iter().find(|option| option.key() == wanted).ok_or_else(|| {
            Message::InvalidConfigOption {
                value: s.to_string(),
                valid: ConfigOption::valid_options(),
            }
            .to_string()
        })
    }
}

/// Which configuration files a `config` invocation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the system file.
    System,
    /// Only the closest local file, or `./.lt` if there is none.
    Local,
    /// The closest local file (if any), then the system file.
    Both,
}

/// A single dotenv file.
///
/// Values are written single-quoted (`KEY='value'`), or double-quoted with
/// escapes when the value itself contains a single quote. Unrelated lines and
/// comments are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvFile {
    path: PathBuf,
}

impl DotenvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// All key/value pairs; empty when the file does not exist.
    pub fn values(&self) -> Result<BTreeMap<String, String>> {
        let mut values = BTreeMap::new();
        if !self.exists() {
            return Ok(values);
        }
        for item in dotenv::from_path_iter(&self.path)? {
            let (key, value) = item?;
            values.insert(key, value);
        }
        Ok(values)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let line = format!("{}={}", key, quote(value));
        let mut lines = self.lines()?;
        match lines.iter().position(|l| line_key(l) == Some(key)) {
            Some(index) => lines[index] = line,
            None => lines.push(line),
        }
        self.write_lines(&lines)
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn unset(&self, key: &str) -> Result<bool> {
        let mut lines = self.lines()?;
        let before = lines.len();
        lines.retain(|l| line_key(l) != Some(key));
        if lines.len() == before {
            return Ok(false);
        }
        self.write_lines(&lines)?;
        Ok(true)
    }

    pub fn delete(&self) -> Result<()> {
        if self.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        Ok(fs::read_to_string(&self.path)?.lines().map(str::to_string).collect())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn line_key(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    line.split_once('=').map(|(key, _)| key.trim())
}

fn quote(value: &str) -> String {
    if value.contains('\'') {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"").replace('$', "\\$");
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", value)
    }
}

/// The local and system configuration files of one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    system: PathBuf,
    local: Option<PathBuf>,
    cwd: PathBuf,
}

impl Config {
    /// Locates both files from the current directory, creating the
    /// application directory on the way.
    pub fn discover() -> Result<Self> {
        let system = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let cwd = std::env::current_dir()?;
        Ok(Self::with_paths(system, &cwd))
    }

    pub fn with_paths(system: impl Into<PathBuf>, cwd: &Path) -> Self {
        let system = system.into();
        let local = Self::find_local(cwd).filter(|local| *local != system);
        Self {
            system,
            local,
            cwd: cwd.to_path_buf(),
        }
    }

    /// Closest `.lt` file in `start` or one of its ancestors.
    pub fn find_local(start: &Path) -> Option<PathBuf> {
        start.ancestors().map(|dir| dir.join(CONFIG_FILE_NAME)).find(|candidate| candidate.is_file())
    }

    pub fn local_path(&self) -> Option<&Path> {
        self.local.as_deref()
    }

    /// Exports local, then system values into the environment. Variables that
    /// are already set win.
    pub fn load(&self) {
        for path in self.local.iter().chain(std::iter::once(&self.system)) {
            if path.is_file() {
                if let Err(e) = dotenv::from_path(path) {
                    tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                }
            }
        }
    }

    /// Files to operate on, in precedence order.
    pub fn files(&self, scope: Scope) -> Vec<PathBuf> {
        match scope {
            Scope::System => vec![self.system.clone()],
            Scope::Local => vec![self.local.clone().unwrap_or_else(|| self.cwd.join(CONFIG_FILE_NAME))],
            Scope::Both => self.local.iter().cloned().chain(std::iter::once(self.system.clone())).collect(),
        }
    }

    /// Merged values of the given files; earlier files win.
    pub fn merged(files: &[PathBuf]) -> Result<BTreeMap<String, String>> {
        let mut merged = BTreeMap::new();
        for path in files.iter().rev() {
            merged.extend(DotenvFile::new(path).values()?);
        }
        Ok(merged)
    }

    /// Writes `key` to the highest-precedence file of `scope`.
    pub fn set(&self, scope: Scope, key: ConfigOption, value: &str) -> Result<PathBuf> {
        let target = self.files(scope).remove(0);
        DotenvFile::new(&target).set(key.key(), value)?;
        Ok(target)
    }
}

/// Discovers and loads the configuration of the current directory.
pub fn load() -> Result<Config> {
    let config = Config::discover()?;
    config.load();
    Ok(config)
}
