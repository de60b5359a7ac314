//! Dynamic shell completion.
//!
//! Candidates come from local data only: issues and projects from the cache,
//! aliases from the aliases file. Completion never talks to Jira, so an
//! empty cache simply yields no issue or project candidates.
//!
//! Registration, e.g. for bash: `source <(COMPLETE=bash lt)`.

use crate::db::cache::Cache;
use crate::libs::aliases::{Aliases, ALIASES_FILE_NAME};
use crate::libs::config::ConfigOption;
use crate::libs::data_storage::DataStorage;
use crate::libs::time::RelativeDateRange;
use clap_complete::engine::CompletionCandidate;
use std::ffi::OsStr;
use std::path::Path;

fn candidate(value: &str, help: &str) -> CompletionCandidate {
    let candidate = CompletionCandidate::new(value);
    if help.is_empty() {
        candidate
    } else {
        candidate.help(Some(help.to_string().into()))
    }
}

fn cache(cache_dir: &Path) -> Option<Cache> {
    if !cache_dir.exists() {
        return None;
    }
    Cache::open(cache_dir).ok()
}

/// Cached issue keys and aliases starting with `current`.
pub fn issue_candidates(cache_dir: &Path, aliases: &Aliases, current: &str) -> Vec<CompletionCandidate> {
    let prefix = current.to_uppercase();
    let mut candidates: Vec<CompletionCandidate> = aliases
        .iter()
        .filter(|(alias, _)| alias.starts_with(current))
        .map(|(alias, issue)| candidate(alias, issue))
        .collect();

    let issues = cache(cache_dir).and_then(|cache| cache.issues().ok()).unwrap_or_default();
    candidates.extend(
        issues
            .iter()
            .filter(|issue| issue.key.to_uppercase().starts_with(&prefix))
            .map(|issue| candidate(&issue.key, &issue.summary)),
    );
    candidates
}

/// Cached projects whose key or lowercased name starts with `current`.
pub fn project_candidates(cache_dir: &Path, current: &str) -> Vec<CompletionCandidate> {
    let projects = cache(cache_dir).and_then(|cache| cache.projects().ok()).unwrap_or_default();
    projects
        .iter()
        .filter(|project| project.key.starts_with(current) || project.name.to_lowercase().starts_with(current))
        .map(|project| candidate(&project.key, &project.name))
        .collect()
}

pub fn date_range_candidates(current: &str) -> Vec<CompletionCandidate> {
    RelativeDateRange::ALL
        .iter()
        .filter(|range| range.value().starts_with(current))
        .map(|range| candidate(range.value(), &format!("short: {}", range.abbreviations().join(", "))))
        .collect()
}

pub fn config_option_candidates(current: &str) -> Vec<CompletionCandidate> {
    let prefix = current.to_uppercase();
    ConfigOption::ALL
        .iter()
        .filter(|option| option.key().starts_with(&prefix))
        .map(|option| candidate(option.key(), ""))
        .collect()
}

pub fn complete_issue(current: &OsStr) -> Vec<CompletionCandidate> {
    let storage = DataStorage::new();
    let aliases = Aliases::read(&storage.base_path().join(ALIASES_FILE_NAME)).unwrap_or_default();
    issue_candidates(&storage.cache_dir(), &aliases, &current.to_string_lossy())
}

pub fn complete_project(current: &OsStr) -> Vec<CompletionCandidate> {
    project_candidates(&DataStorage::new().cache_dir(), &current.to_string_lossy())
}

pub fn complete_date_range(current: &OsStr) -> Vec<CompletionCandidate> {
    date_range_candidates(&current.to_string_lossy())
}

pub fn complete_config_option(current: &OsStr) -> Vec<CompletionCandidate> {
    config_option_candidates(&current.to_string_lossy())
}
