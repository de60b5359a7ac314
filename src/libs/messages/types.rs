#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    NoConfigFound,
    ConfigReset,
    ConfigUnsetting { key: String, path: String },
    ConfigKeySet { key: String, path: String },
    ConfirmDeleteConfig(String), // path
    InvalidConfigOption { value: String, valid: String },

    // === CACHE MESSAGES ===
    ConfirmDeleteCache,
    CacheReset,
    ProjectCacheUpdated,
    IssueCacheUpdated,
    CacheCold,

    // === AUTHENTICATION MESSAGES ===
    CreateTokenHere,
    PromptToken,
    TokenReadFromStore,
    TokenReadFromPrompt,
    TokenSaved(String), // user
    ConfirmDeleteToken,
    TokenRemoved,
    NoTokenToDelete,
    NoUserForToken,
    CouldNotConnect { instance: String, error: String },
    CouldNotAuthenticate(String),
    WrongToken(i32), // attempt count
    LoggedInAs(String),

    // === LOG MESSAGES ===
    IssueNotFound { error: String, issue: String },
    DidYouMean { key: String, summary: String },
    DidYouMeanList(String),
    SelectIssue,
    SelectCancel,
    InvalidEntry(String),
    NonPositiveDuration(String),
    DurationTooLong(String),
    EndBeforeStart { start: String, end: String },
    OverlapWarning { from: String, to: String },
    DailyLimitExceeded(String), // already logged
    ConfirmContinue,
    WorklogCreated { duration: String, issue: String },

    // === REPORTING MESSAGES ===
    LoggedTotal { total: String, from: String, to: String },
    Period(String),
    InvalidDateRange(String),
    NoRecentWorklogs,
    ShowingBudgetFor(String),

    // === ALIAS MESSAGES ===
    AliasExists { alias: String, issue: String },
    AliasCreated { alias: String, issue: String },
    PromptAliasIssue,

    // === INPUT MESSAGES ===
    InvalidDuration(String),
    InvalidTime(String),
    InvalidDate(String),
}
