//! Tempo Timesheets (v4) worklogs.

use super::ApiError;
use crate::libs::http::Http;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

const WORKLOGS_URL: &str = "rest/tempo-timesheets/4/worklogs";
const SEARCH_URL: &str = "rest/tempo-timesheets/4/worklogs/search";
const STARTED_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorklogIssue {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawWorklog {
    tempo_worklog_id: i64,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    origin_task_id: Option<String>,
    issue: WorklogIssue,
    started: String,
    time_spent_seconds: i64,
    #[serde(default)]
    comment: Option<String>,
}

/// A worklog as returned by Tempo.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawWorklog")]
pub struct Worklog {
    pub tempo_worklog_id: i64,
    pub origin_task_id: Option<String>,
    pub issue: WorklogIssue,
    pub started: NaiveDateTime,
    pub time_spent_seconds: i64,
    pub comment: Option<String>,
}

impl TryFrom<RawWorklog> for Worklog {
    type Error = String;

    fn try_from(raw: RawWorklog) -> Result<Self, Self::Error> {
        if raw.time_spent_seconds <= 0 {
            return Err(format!(
                "worklog {} has non-positive timeSpentSeconds {}",
                raw.tempo_worklog_id, raw.time_spent_seconds
            ));
        }
        Ok(Self {
            tempo_worklog_id: raw.tempo_worklog_id,
            origin_task_id: raw.origin_task_id,
            issue: raw.issue,
            started: parse_started(&raw.started)?,
            time_spent_seconds: raw.time_spent_seconds,
            comment: raw.comment,
        })
    }
}

impl Worklog {
    pub fn duration(&self) -> Duration {
        Duration::seconds(self.time_spent_seconds)
    }

    pub fn ended(&self) -> NaiveDateTime {
        self.started + self.duration()
    }

    pub fn day(&self) -> NaiveDate {
        self.started.date()
    }

    pub fn project_key(&self) -> &str {
        self.issue.key.split_once('-').map_or(self.issue.key.as_str(), |(project, _)| project)
    }
}

/// Accepts `YYYY-MM-DD HH:MM:SS.fff` as well as ISO `YYYY-MM-DDTHH:MM:SS.fff`.
pub fn parse_started(value: &str) -> Result<NaiveDateTime, String> {
    STARTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("invalid worklog start '{}'", value))
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_string_or_number(deserializer)?.unwrap_or_default())
}

fn optional_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Request body for a new worklog.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWorklog {
    pub worker: String,
    pub origin_task_id: String,
    pub started: String,
    pub time_spent_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewWorklog {
    pub fn new(worker: &str, task_id: &str, started: NaiveDateTime, duration: Duration, comment: Option<String>) -> Self {
        Self {
            worker: worker.to_string(),
            origin_task_id: task_id.to_string(),
            started: started.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            time_spent_seconds: duration.num_seconds(),
            comment: comment.filter(|c| !c.is_empty()),
        }
    }
}

#[derive(Serialize)]
struct WorklogSearch<'a> {
    from: String,
    to: String,
    worker: [&'a str; 1],
}

#[derive(Clone, Debug)]
pub struct Tempo {
    http: Http,
}

impl Tempo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// Worklogs of `worker` between `from` and `to` (inclusive), ordered by
    /// start time.
    pub async fn get_worklogs(&self, worker: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<Worklog>, ApiError> {
        let search = WorklogSearch {
            from: from.format("%Y-%m-%d").to_string(),
            to: to.format("%Y-%m-%d").to_string(),
            worker: [worker],
        };
        let mut worklogs: Vec<Worklog> = self.http.post_json(SEARCH_URL, &search).await?;
        worklogs.sort_by_key(|worklog| worklog.started);
        Ok(worklogs)
    }

    pub async fn create_worklog(&self, worklog: &NewWorklog) -> Result<Vec<Worklog>, ApiError> {
        tracing::debug!("Creating worklog {:?}", worklog);
        self.http.post_json(WORKLOGS_URL, worklog).await
    }
}
