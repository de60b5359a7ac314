#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use log_time_to_tempo::api::{ApiError, Session, TokenSource, MAX_RETRY_COUNT};
    use log_time_to_tempo::libs::secret::Secret;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct ApiTestContext {
        _temp_dir: TempDir,
        secret_path: PathBuf,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ApiTestContext {
                secret_path: temp_dir.path().join(Secret::file_name("jdoe")),
                _temp_dir: temp_dir,
            }
        }
    }

    /// Accepts a single token; prompted tokens come from a queue.
    struct MockSession {
        valid_token: String,
        secret_path: PathBuf,
        prompts: RefCell<VecDeque<String>>,
        logins: Cell<u32>,
        retry_count: i32,
        offline: bool,
    }

    impl MockSession {
        fn new(ctx: &ApiTestContext, prompts: &[&str]) -> Self {
            Self {
                valid_token: "valid".to_string(),
                secret_path: ctx.secret_path.clone(),
                prompts: RefCell::new(prompts.iter().map(|p| p.to_string()).collect()),
                logins: Cell::new(0),
                retry_count: 0,
                offline: false,
            }
        }

        fn prompts_left(&self) -> usize {
            self.prompts.borrow().len()
        }
    }

    impl Session for MockSession {
        type User = String;

        async fn login(&self, token: &str) -> Result<String, ApiError> {
            self.logins.set(self.logins.get() + 1);
            if self.offline {
                return Err(ApiError::Status {
                    status: 502,
                    message: "Bad Gateway".to_string(),
                });
            }
            if token == self.valid_token {
                Ok("jdoe".to_string())
            } else {
                Err(ApiError::Unauthorized)
            }
        }

        fn secret(&self) -> Option<Secret> {
            Some(Secret::at(&self.secret_path))
        }

        fn prompt_token(&self) -> Result<String> {
            self.prompts.borrow_mut().pop_front().ok_or_else(|| anyhow!("no more tokens"))
        }

        fn instance(&self) -> &str {
            "https://jira.example.com"
        }

        fn retry(&self) -> i32 {
            self.retry_count
        }

        fn inc_retry(&mut self) {
            self.retry_count += 1;
        }
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_provided_token(ctx: &mut ApiTestContext) {
        let mut session = MockSession::new(ctx, &[]);
        let login = session.authenticate(Some("valid".to_string())).await.unwrap();

        assert_eq!(login.user, "jdoe");
        assert_eq!(login.source, TokenSource::Provided);
        assert_eq!(session.logins.get(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_rejected_provided_token_is_final(ctx: &mut ApiTestContext) {
        let mut session = MockSession::new(ctx, &["valid"]);
        let error = session.authenticate(Some("expired".to_string())).await.unwrap_err();

        assert!(error.to_string().contains("Could not authenticate"));
        assert_eq!(session.prompts_left(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_stored_token(ctx: &mut ApiTestContext) {
        Secret::at(&ctx.secret_path).store("valid").unwrap();
        let mut session = MockSession::new(ctx, &[]);
        let login = session.authenticate(None).await.unwrap();

        assert_eq!(login.token, "valid");
        assert_eq!(login.source, TokenSource::Stored);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_rejected_stored_token_prompts(ctx: &mut ApiTestContext) {
        Secret::at(&ctx.secret_path).store("revoked").unwrap();
        let mut session = MockSession::new(ctx, &["valid"]);
        let login = session.authenticate(None).await.unwrap();

        assert_eq!(login.source, TokenSource::Prompted);
        assert_eq!(session.retry(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_prompt_until_valid(ctx: &mut ApiTestContext) {
        let mut session = MockSession::new(ctx, &["typo", "valid"]);
        let login = session.authenticate(None).await.unwrap();

        assert_eq!(login.token, "valid");
        assert_eq!(login.source, TokenSource::Prompted);
        assert_eq!(session.logins.get(), 2);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_gives_up_after_max_retries(ctx: &mut ApiTestContext) {
        let mut session = MockSession::new(ctx, &["a", "b", "c", "d", "valid"]);
        let error = session.authenticate(None).await.unwrap_err();

        assert!(error.to_string().contains(&format!("Token rejected {} times", MAX_RETRY_COUNT)));
        assert_eq!(session.retry(), MAX_RETRY_COUNT);
        assert_eq!(session.prompts_left(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_server_errors_count_as_rejections(ctx: &mut ApiTestContext) {
        let mut session = MockSession::new(ctx, &["a", "b", "c", "d"]);
        session.offline = true;
        assert!(session.authenticate(None).await.is_err());
        assert_eq!(session.logins.get(), MAX_RETRY_COUNT as u32 + 1);
    }
}
