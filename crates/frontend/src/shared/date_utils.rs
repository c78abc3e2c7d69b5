/// Utilities for date and time parsing and formatting
///
/// Wire timestamps are ISO strings; parsing is tolerant because the API
/// mixes full RFC 3339, space-separated and date-only values.
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Parse a wire timestamp, trying the formats the API actually emits.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Chronological order for optional wire timestamps; absent or unparsable
/// values sort first.
pub fn compare_timestamps(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.and_then(parse_timestamp);
    let b = b.and_then(parse_timestamp);
    a.cmp(&b)
}

/// Format ISO date string to DD.MM.YYYY for table cells
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            let day = day.split(' ').next().unwrap_or(day);
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Spreadsheet date format: "5 January 2024", "-" when absent.
pub fn format_export_date(value: Option<&str>) -> String {
    value
        .and_then(parse_timestamp)
        .map(|dt| dt.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_fallbacks() {
        assert!(parse_timestamp("2024-03-15T14:02:26Z").is_some());
        assert!(parse_timestamp("2024-03-15T14:02:26").is_some());
        assert!(parse_timestamp("2024-03-15 14:02:26").is_some());
        assert!(parse_timestamp("2024-03-15").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn later_date_compares_greater() {
        assert_eq!(
            compare_timestamps(Some("2024-01-06"), Some("2024-01-05")),
            Ordering::Greater
        );
        assert_eq!(
            compare_timestamps(Some("2024-01-05"), Some("2024-01-05")),
            Ordering::Equal
        );
    }

    #[test]
    fn missing_timestamp_sorts_first() {
        assert_eq!(
            compare_timestamps(None, Some("2024-01-05")),
            Ordering::Less
        );
        assert_eq!(compare_timestamps(None, None), Ordering::Equal);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn export_date_is_long_form_with_placeholder() {
        assert_eq!(
            format_export_date(Some("2024-01-05T10:30:00Z")),
            "5 January 2024"
        );
        assert_eq!(format_export_date(None), "-");
        assert_eq!(format_export_date(Some("garbage")), "-");
    }
}
