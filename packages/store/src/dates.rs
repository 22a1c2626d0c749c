//! Date helpers shared by the CSV codec and the panels. All record
//! timestamps are epoch milliseconds, UTC; the wire/display day format is
//! `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate};

/// Format an epoch-ms timestamp as `YYYY-MM-DD`.
pub fn format_date(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Format an epoch-ms timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_datetime(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.naive_utc().format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Parse a `YYYY-MM-DD` day into epoch ms at midnight UTC.
pub fn parse_date(s: &str) -> Option<i64> {
    let day = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()?;
    Some(day.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_round_trip() {
        let ms = parse_date("2026-08-07").expect("valid day");
        assert_eq!(format_date(ms), "2026-08-07");
    }

    #[test]
    fn rejects_malformed_days() {
        assert!(parse_date("not-a-date").is_none());
        assert!(parse_date("2026-13-40").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn datetime_display() {
        let ms = parse_date("2026-08-07").expect("valid day");
        assert_eq!(format_datetime(ms), "2026-08-07 00:00");
    }
}
