#[cfg(test)]
mod tests {
    use log_time_to_tempo::api::jira::{JiraWorklog, TimeTracking, WorklogAuthor};
    use log_time_to_tempo::libs::budget::{budget_rows, per_author, percent, Emphasis};

    const HOUR: i64 = 3600;

    fn worklog(name: &str, display_name: &str, hours: i64) -> JiraWorklog {
        JiraWorklog {
            author: WorklogAuthor {
                name: name.to_string(),
                display_name: display_name.to_string(),
            },
            time_spent_seconds: hours * HOUR,
        }
    }

    fn tracking(estimate: i64, used: i64, remaining: i64) -> TimeTracking {
        TimeTracking {
            original_estimate_seconds: Some(estimate * HOUR),
            remaining_estimate_seconds: Some(remaining * HOUR),
            time_spent_seconds: Some(used * HOUR),
        }
    }

    fn worklogs() -> Vec<JiraWorklog> {
        vec![
            worklog("jdoe", "Jane Doe", 10),
            worklog("mmuster", "", 5),
            worklog("jdoe", "Jane Doe", 5),
        ]
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(2, 3), "66.7%");
        assert_eq!(percent(5, 0), "-");
    }

    #[test]
    fn test_per_author() {
        assert_eq!(
            per_author(&worklogs()),
            vec![("Jane Doe".to_string(), 15 * HOUR), ("mmuster".to_string(), 5 * HOUR)]
        );
    }

    #[test]
    fn test_budget_rows() {
        let rows = budget_rows(&tracking(80, 20, 60), &worklogs());
        let summary: Vec<(&str, i64, &str)> = rows.iter().map(|r| (r.label.as_str(), r.seconds / HOUR, r.share.as_str())).collect();

        assert_eq!(
            summary,
            vec![
                ("Estimate", 80, ""),
                ("Used (total)", 20, "25.0%"),
                ("Jane Doe", 15, "75.0%"),
                ("mmuster", 5, "25.0%"),
                ("Remaining", 60, "75.0%"),
                ("Jane Doe", 45, ""),
                ("mmuster", 15, ""),
            ]
        );
        assert_eq!(rows[0].emphasis, Emphasis::Bold);
        assert_eq!(rows[2].emphasis, Emphasis::Dim);
        assert_eq!(rows[0].person_days(), "10d 0h");
        assert_eq!(rows[1].person_days(), " 2d 4h");
        assert_eq!(rows[0].hours(), "80h");
    }

    #[test]
    fn test_nothing_remaining() {
        let rows = budget_rows(&tracking(20, 20, 0), &worklogs());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows.last().unwrap().label, "Remaining");
        assert_eq!(rows.last().unwrap().share, "0.0%");
    }

    #[test]
    fn test_without_estimate() {
        let rows = budget_rows(&TimeTracking::default(), &[]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].share, "-");
        assert_eq!(rows[2].share, "-");
    }
}
