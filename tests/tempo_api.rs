#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use httpmock::prelude::*;
    use log_time_to_tempo::api::jira::Jira;
    use log_time_to_tempo::api::tempo::{parse_started, NewWorklog, Tempo};
    use log_time_to_tempo::api::ApiError;
    use serde_json::json;

    fn tempo(server: &MockServer) -> Tempo {
        let mut jira = Jira::new(&server.base_url(), None).unwrap();
        jira.set_token("token");
        Tempo::new(jira.http().clone())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_get_worklogs_sorted_by_start() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/rest/tempo-timesheets/4/worklogs/search")
                    .header("Authorization", "Bearer token")
                    .json_body(json!({ "from": "2024-05-13", "to": "2024-05-15", "worker": ["JIRAUSER10100"] }));
                then.status(200).json_body(json!([
                    {
                        "tempoWorklogId": 2,
                        "originTaskId": 10001,
                        "issue": { "id": 10001, "key": "ABC-1", "summary": "Setup" },
                        "started": "2024-05-14 13:00:00.000",
                        "timeSpentSeconds": 3600,
                        "comment": "review"
                    },
                    {
                        "tempoWorklogId": 1,
                        "originTaskId": "10007",
                        "issue": { "id": "10007", "key": "TSI-7", "summary": "Admin" },
                        "started": "2024-05-13T09:00:00.000",
                        "timeSpentSeconds": 5400
                    }
                ]));
            })
            .await;

        let worklogs = tempo(&server).get_worklogs("JIRAUSER10100", date(2024, 5, 13), date(2024, 5, 15)).await.unwrap();
        mock.assert_async().await;

        assert_eq!(worklogs.len(), 2);
        assert_eq!(worklogs[0].issue.key, "TSI-7");
        assert_eq!(worklogs[0].comment, None);
        assert_eq!(worklogs[0].ended(), date(2024, 5, 13).and_hms_opt(10, 30, 0).unwrap());
        assert_eq!(worklogs[1].origin_task_id.as_deref(), Some("10001"));
        assert_eq!(worklogs[1].issue.id, "10001");
        assert_eq!(worklogs[1].project_key(), "ABC");
        assert_eq!(worklogs[1].day(), date(2024, 5, 14));
    }

    #[tokio::test]
    async fn test_worklog_without_time_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/tempo-timesheets/4/worklogs/search");
                then.status(200).json_body(json!([{
                    "tempoWorklogId": 3,
                    "issue": { "id": 1, "key": "ABC-1" },
                    "started": "2024-05-14 13:00:00.000",
                    "timeSpentSeconds": 0
                }]));
            })
            .await;

        let result = tempo(&server).get_worklogs("JIRAUSER10100", date(2024, 5, 14), date(2024, 5, 14)).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_create_worklog() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/tempo-timesheets/4/worklogs").json_body(json!({
                    "worker": "JIRAUSER10100",
                    "originTaskId": "10001",
                    "started": "2024-05-15T09:00:00.000",
                    "timeSpentSeconds": 5400,
                    "comment": "review"
                }));
                then.status(200).json_body(json!([{
                    "tempoWorklogId": 42,
                    "originTaskId": 10001,
                    "issue": { "id": 10001, "key": "ABC-1" },
                    "started": "2024-05-15 09:00:00.000",
                    "timeSpentSeconds": 5400,
                    "comment": "review"
                }]));
            })
            .await;

        let started = date(2024, 5, 15).and_hms_opt(9, 0, 0).unwrap();
        let new_worklog = NewWorklog::new("JIRAUSER10100", "10001", started, Duration::minutes(90), Some("review".to_string()));
        let created = tempo(&server).create_worklog(&new_worklog).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created[0].tempo_worklog_id, 42);
    }

    #[test]
    fn test_new_worklog_skips_empty_comment() {
        let started = date(2024, 5, 15).and_hms_opt(9, 0, 0).unwrap();
        let new_worklog = NewWorklog::new("JIRAUSER10100", "10001", started, Duration::hours(1), Some(String::new()));
        let body = serde_json::to_value(&new_worklog).unwrap();
        assert!(body.get("comment").is_none());
        assert_eq!(body["timeSpentSeconds"], 3600);
    }

    #[test]
    fn test_parse_started() {
        let expected = date(2024, 5, 14).and_hms_milli_opt(13, 0, 0, 250).unwrap();
        assert_eq!(parse_started("2024-05-14 13:00:00.250").unwrap(), expected);
        assert_eq!(parse_started("2024-05-14T13:00:00.250").unwrap(), expected);
        assert_eq!(parse_started("2024-05-14 13:00:00").unwrap(), date(2024, 5, 14).and_hms_opt(13, 0, 0).unwrap());
        assert!(parse_started("14.05.2024").is_err());
    }
}
