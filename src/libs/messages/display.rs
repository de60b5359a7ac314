//! Text for every [`Message`] variant.
//!
//! All user-facing wording lives here so that commands only pick a variant
//! and its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::NoConfigFound => "No configuration found.".to_string(),
            Message::ConfigReset => "Config reset.".to_string(),
            Message::ConfigUnsetting { key, path } => format!("Unsetting {} from \"{}\"", key, path),
            Message::ConfigKeySet { key, path } => format!("Set {} in \"{}\"", key, path),
            Message::ConfirmDeleteConfig(path) => format!("Do you want to delete configuration at \"{}\"?", path),
            Message::InvalidConfigOption { value, valid } => {
                format!("'{}' is not a valid configuration option.\nValid options are: {}", value, valid)
            }

            // === CACHE MESSAGES ===
            Message::ConfirmDeleteCache => "Delete cache?".to_string(),
            Message::CacheReset => "Cache reset.".to_string(),
            Message::ProjectCacheUpdated => "project cache updated.".to_string(),
            Message::IssueCacheUpdated => "issue cache updated.".to_string(),
            Message::CacheCold => "Local cache is empty, fetching projects and issues".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::CreateTokenHere => "Create your personal access token here:".to_string(),
            Message::PromptToken => "JIRA API token".to_string(),
            Message::TokenReadFromStore => "Token read from token store".to_string(),
            Message::TokenReadFromPrompt => "Token read from prompt".to_string(),
            Message::TokenSaved(user) => format!("Saved token for '{}' to token store.", user),
            Message::ConfirmDeleteToken => "Delete API token from token store?".to_string(),
            Message::TokenRemoved => "Token removed from token store.".to_string(),
            Message::NoTokenToDelete => "No token in token store to delete".to_string(),
            Message::NoUserForToken => "Cannot delete token without JIRA_USER".to_string(),
            Message::CouldNotConnect { instance, error } => format!("Could not connect to {}: {}", instance, error),
            Message::CouldNotAuthenticate(error) => format!("Could not authenticate: {}", error),
            Message::WrongToken(attempts) => format!("Token rejected {} times, giving up", attempts),
            Message::LoggedInAs(user) => format!("user: {}", user),

            // === LOG MESSAGES ===
            Message::IssueNotFound { error, issue } => format!("Error: {} ({})", error.to_lowercase(), issue),
            Message::DidYouMean { key, summary } => format!("Did you mean '{}' ({})?", key, summary),
            Message::DidYouMeanList(keys) => format!("Did you mean: {}", keys),
            Message::SelectIssue => "Which issue did you mean?".to_string(),
            Message::SelectCancel => "None of these".to_string(),
            Message::InvalidEntry(entry) => format!("Invalid entry: {}", entry),
            Message::NonPositiveDuration(duration) => format!("Cannot log a duration of {}", duration),
            Message::DurationTooLong(duration) => format!("Duration of {} does not end on any valid date", duration),
            Message::EndBeforeStart { start, end } => format!("End time {} is not after start time {}", end, start),
            Message::OverlapWarning { from, to } => {
                format!("Warning: The time entry overlaps with an existing worklog from {} to {}", from, to)
            }
            Message::DailyLimitExceeded(logged) => format!(
                "You already have {} logged on that day. Cannot log more than 10h per day.",
                logged
            ),
            Message::ConfirmContinue => "Continue?".to_string(),
            Message::WorklogCreated { duration, issue } => format!("Logged {} on {}", duration, issue),

            // === REPORTING MESSAGES ===
            Message::LoggedTotal { total, from, to } => format!("You have logged {} from {} to {}.", total, from, to),
            Message::Period(period) => format!("Period: {}", period),
            Message::InvalidDateRange(range) => format!("Invalid date range: {}", range),
            Message::NoRecentWorklogs => "No recent worklogs found. Please specify an issue.".to_string(),
            Message::ShowingBudgetFor(issue) => format!("Showing budget for {}", issue),

            // === ALIAS MESSAGES ===
            Message::AliasExists { alias, issue } => format!("Alias {} already exists ({}). Overwrite?", alias, issue),
            Message::AliasCreated { alias, issue } => format!("Alias for {} created: {}", alias, issue),
            Message::PromptAliasIssue => "Issue".to_string(),

            // === INPUT MESSAGES ===
            Message::InvalidDuration(value) => format!("'{}' is not a valid duration (try 8, 1.5, 2h, 1h30m or 1:30)", value),
            Message::InvalidTime(value) => format!("'{}' is not a valid time (try 9, 9:30 or 0930)", value),
            Message::InvalidDate(value) => {
                format!("'{}' is not a valid date (try today, yesterday, monday, 24.12. or 2024-12-24)", value)
            }
        };
        write!(f, "{}", text)
    }
}
