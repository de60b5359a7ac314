#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use log_time_to_tempo::libs::formatter::{
        format_clock, format_date_relative_to, format_duration, format_duration_aligned, format_duration_workdays,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(90)), "1h 30m");
        assert_eq!(format_duration(Duration::hours(8)), "8h");
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
        assert_eq!(format_duration(Duration::zero()), "0m");
        assert_eq!(format_duration(Duration::minutes(-90)), "-1h 30m");
    }

    #[test]
    fn test_format_duration_aligned_columns() {
        assert_eq!(format_duration_aligned(Duration::minutes(8 * 60 + 30), 2), " 8h 30m");
        assert_eq!(format_duration_aligned(Duration::hours(8), 2), " 8h    ");
        assert_eq!(format_duration_aligned(Duration::minutes(45), 2), "    45m");
        assert_eq!(format_duration_aligned(Duration::minutes(12 * 60 + 5), 2), "12h  5m");
        assert_eq!(format_duration_aligned(Duration::zero(), 2), " 0h    ");
        assert_eq!(format_duration_aligned(Duration::hours(-3), 2), " 0h    ");

        // every variant has the same width
        let widths: Vec<usize> = [0, 45, 480, 510, 725]
            .iter()
            .map(|m| format_duration_aligned(Duration::minutes(*m), 3).chars().count())
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_format_duration_workdays() {
        assert_eq!(format_duration_workdays(100 * 3600, 2), "12d 4h");
        assert_eq!(format_duration_workdays(3 * 8 * 3600 + 1800, 2), " 3d 0h 30m");
        assert_eq!(format_duration_workdays(0, 2), " 0d 0h");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(NaiveTime::from_hms_opt(9, 5, 0).unwrap()), "09:05");
    }

    #[test]
    fn test_format_date_relative() {
        let today = date(2024, 5, 15);
        assert_eq!(format_date_relative_to(today, today), "today");
        assert_eq!(format_date_relative_to(date(2024, 5, 14), today), "yesterday");
        assert_eq!(format_date_relative_to(date(2024, 5, 16), today), "tomorrow");
        assert_eq!(format_date_relative_to(date(2024, 5, 13), today), "Monday, 13.05.");
        assert_eq!(format_date_relative_to(date(2024, 5, 1), today), "Wed 01.05.2024");
    }
}
