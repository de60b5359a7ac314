use super::{ApiError, Session};
use crate::libs::http::Http;
use crate::libs::messages::Message;
use crate::libs::secret::{prompt_hidden, Secret};
use crate::libs::style;
use crate::msg_print;
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INSTANCE: &str = "https://jira.codecentric.de";
const MYSELF_URL: &str = "rest/api/2/myself";
const ISSUE_URL: &str = "rest/api/2/issue";
const PROJECT_URL: &str = "rest/api/2/project";
const SEARCH_URL: &str = "rest/api/2/search";
const TOKEN_PAGE: &str = "secure/ViewProfile.jspa?selectedTab=com.atlassian.pats.pats-plugin:jira-user-personal-access-tokens";
pub const SEARCH_PAGE_SIZE: u32 = 100;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraIssue {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub fields: JiraIssueFields,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub timetracking: Option<TimeTracking>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeTracking {
    #[serde(default)]
    pub original_estimate_seconds: Option<i64>,
    #[serde(default)]
    pub remaining_estimate_seconds: Option<i64>,
    #[serde(default)]
    pub time_spent_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklog {
    pub author: WorklogAuthor,
    pub time_spent_seconds: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogAuthor {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub key: String,
    pub name: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SearchPage {
    #[serde(default)]
    total: u32,
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WorklogPage {
    #[serde(default)]
    total: u32,
    #[serde(default)]
    worklogs: Vec<JiraWorklog>,
}

#[derive(Debug)]
pub struct Jira {
    http: Http,
    user: Option<String>,
    retries: i32,
}

impl Session for Jira {
    type User = JiraUser;

    async fn login(&self, token: &str) -> Result<JiraUser, ApiError> {
        self.http.with_token(token).get_json(MYSELF_URL, &[]).await
    }

    fn secret(&self) -> Option<Secret> {
        self.user.as_deref().map(|user| Secret::for_user(user))
    }

    fn prompt_token(&self) -> Result<String> {
        msg_print!(Message::CreateTokenHere);
        msg_print!(style::link(&self.token_url()));
        let token = prompt_hidden(&Message::PromptToken.to_string())?;
        tracing::info!("{}", Message::TokenReadFromPrompt);
        Ok(token)
    }

    fn instance(&self) -> &str {
        self.http.base_url()
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

impl Jira {
    /// Unauthenticated client; `user` selects the token store entry.
    pub fn new(instance: &str, user: Option<String>) -> Result<Self, ApiError> {
        Ok(Self {
            http: Http::new(instance)?,
            user: user.filter(|u| !u.is_empty()),
            retries: 0,
        })
    }

    pub fn set_token(&mut self, token: &str) {
        self.http = self.http.with_token(token);
    }

    pub fn http(&self) -> &Http {
        &self.http
    }

    /// Page where personal access tokens are created.
    pub fn token_url(&self) -> String {
        self.http.url(TOKEN_PAGE)
    }

    pub async fn issue(&self, key: &str, fields: &str) -> Result<JiraIssue, ApiError> {
        let url = self.http.segment_url(ISSUE_URL, &[key])?;
        self.http.get_json_url(url, &[("fields", fields.to_string())]).await
    }

    /// All Jira worklogs of an issue.
    pub async fn issue_worklogs(&self, key: &str) -> Result<Vec<JiraWorklog>, ApiError> {
        let url = self.http.segment_url(ISSUE_URL, &[key, "worklog"])?;
        let mut worklogs = Vec::new();
        loop {
            let query = [("startAt", worklogs.len().to_string()), ("maxResults", SEARCH_PAGE_SIZE.to_string())];
            let page: WorklogPage = self.http.get_json_url(url.clone(), &query).await?;
            let received = page.worklogs.len();
            worklogs.extend(page.worklogs);
            if received == 0 || worklogs.len() as u32 >= page.total {
                return Ok(worklogs);
            }
        }
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.http.get_json(PROJECT_URL, &[]).await
    }

    /// Every issue matching `jql`, following pagination.
    pub async fn search(&self, jql: &str, fields: &str) -> Result<Vec<JiraIssue>, ApiError> {
        let mut issues = Vec::new();
        loop {
            let query = [
                ("jql", jql.to_string()),
                ("fields", fields.to_string()),
                ("startAt", issues.len().to_string()),
                ("maxResults", SEARCH_PAGE_SIZE.to_string()),
            ];
            let page: SearchPage = self.http.get_json(SEARCH_URL, &query).await?;
            let received = page.issues.len();
            issues.extend(page.issues);
            tracing::debug!("search '{}': {}/{}", jql, issues.len(), page.total);
            if received == 0 || issues.len() as u32 >= page.total {
                return Ok(issues);
            }
        }
    }

    /// All issues visible to the user.
    pub async fn all_issues(&self) -> Result<Vec<JiraIssue>, ApiError> {
        self.search("ORDER BY key ASC", "summary").await
    }

    pub async fn project_issues(&self, project: &str) -> Result<Vec<JiraIssue>, ApiError> {
        let jql = format!("project = \"{}\" ORDER BY key ASC", project.replace('"', "\\\""));
        self.search(&jql, "summary").await
    }
}
