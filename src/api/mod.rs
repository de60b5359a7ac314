//! Clients for the Jira and Tempo REST APIs.
//!
//! Both services live on the same Jira instance and accept the same personal
//! access token, so they share one [`Http`](crate::libs::http::Http) client.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use log_time_to_tempo::api::{jira::Jira, tempo::Tempo, Session};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut jira = Jira::new("https://jira.example.com", Some("jdoe".to_string()))?;
//! let login = jira.authenticate(None).await?;
//! let tempo = Tempo::new(jira.http().clone());
//! let today = chrono::Local::now().date_naive();
//! let worklogs = tempo.get_worklogs(&login.user.key, today, today).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use thiserror::Error;

pub mod jira;
pub mod tempo;

/// Number of times a rejected stored or prompted token is asked for again.
pub const MAX_RETRY_COUNT: i32 = 3;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Where the token of a successful login came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token` or `JIRA_API_TOKEN`.
    Provided,
    /// The encrypted token store.
    Stored,
    /// Typed in at the prompt.
    Prompted,
}

#[derive(Debug, Clone)]
pub struct Login<U> {
    pub token: String,
    pub user: U,
    pub source: TokenSource,
}

/// Token based authentication with retries.
#[allow(async_fn_in_trait)]
pub trait Session {
    type User;

    /// Verifies `token` and returns the user it belongs to.
    async fn login(&self, token: &str) -> std::result::Result<Self::User, ApiError>;

    /// Token store entry of the configured user, if a user is known.
    fn secret(&self) -> Option<Secret>;

    /// Asks the user for a token.
    fn prompt_token(&self) -> Result<String>;

    /// Describes the service for connection errors.
    fn instance(&self) -> &str;

    fn retry(&self) -> i32;

    fn inc_retry(&mut self);

    /// Finds a working token.
    ///
    /// A `provided` token is tried once and its failure is final. Otherwise
    /// the stored token is tried first, then prompted tokens, giving up after
    /// [`MAX_RETRY_COUNT`] rejections.
    async fn authenticate(&mut self, provided: Option<String>) -> Result<Login<Self::User>> {
        if let Some(token) = provided.filter(|t| !t.is_empty()) {
            return match self.login(&token).await {
                Ok(user) => Ok(Login {
                    token,
                    user,
                    source: TokenSource::Provided,
                }),
                Err(e @ ApiError::Transport(_)) => Err(self.connection_error(&e)),
                Err(e) => Err(msg_error_anyhow!(Message::CouldNotAuthenticate(e.to_string()))),
            };
        }

        let (mut token, mut source) = match self.secret().and_then(|secret| secret.get()) {
            Some(token) => {
                msg_info!(Message::TokenReadFromStore);
                (token, TokenSource::Stored)
            }
            None => (self.prompt_token()?, TokenSource::Prompted),
        };

        loop {
            match self.login(&token).await {
                Ok(user) => return Ok(Login { token, user, source }),
                Err(e @ ApiError::Transport(_)) => return Err(self.connection_error(&e)),
                Err(e) => {
                    tracing::debug!("Token rejected: {}", e);
                    if self.retry() >= MAX_RETRY_COUNT {
                        return Err(msg_error_anyhow!(Message::WrongToken(MAX_RETRY_COUNT)));
                    }
                    self.inc_retry();
                    token = self.prompt_token()?;
                    source = TokenSource::Prompted;
                }
            }
        }
    }

    fn connection_error(&self, error: &ApiError) -> anyhow::Error {
        msg_error_anyhow!(Message::CouldNotConnect {
            instance: self.instance().to_string(),
            error: error.to_string(),
        })
    }
}
