//! Short names for issue keys.
//!
//! Aliases are kept as a pretty-printed JSON object (`alias -> issue key`) in
//! the file `aliases` inside the application directory.

use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const ALIASES_FILE_NAME: &str = "aliases";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aliases {
    entries: BTreeMap<String, String>,
}

impl Aliases {
    /// Reads aliases from `path`; a missing file means no aliases.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(Self {
            entries: serde_json::from_str(&content)?,
        })
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    /// Adds or replaces an alias, returning the issue it pointed to before.
    pub fn insert(&mut self, alias: &str, issue: &str) -> Option<String> {
        self.entries.insert(alias.to_string(), issue.to_string())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(alias, issue)| (alias.as_str(), issue.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First alias (in name order) pointing at `issue_key`.
    pub fn alias_for(&self, issue_key: &str) -> Option<&str> {
        self.entries.iter().find(|(_, issue)| issue.as_str() == issue_key).map(|(alias, _)| alias.as_str())
    }

    /// Resolves user input to `(issue key, alias)`.
    ///
    /// Input naming an alias resolves to its issue. An issue key that has an
    /// alias keeps the key and reports the alias.
    pub fn resolve(&self, input: &str) -> (String, Option<String>) {
        match self.get(input) {
            Some(issue) => (issue.to_string(), Some(input.to_string())),
            None => (input.to_string(), self.alias_for(input).map(str::to_string)),
        }
    }

    /// Name to show for an issue: its alias if it has one, else the key.
    pub fn display_name(&self, issue_key: &str) -> String {
        self.alias_for(issue_key).unwrap_or(issue_key).to_string()
    }

    /// `alias: issue` lines in name order.
    pub fn listing(&self) -> String {
        self.iter().map(|(alias, issue)| format!("{}: {}", alias, issue)).collect::<Vec<_>>().join("\n")
    }
}
