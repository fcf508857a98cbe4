//! Field normalization for profile input
//!
//! Text is trimmed and blank optional values become `None`. Dates accept
//! `YYYY-MM-DD` or a full RFC 3339 timestamp (only the date is kept).

use chrono::{DateTime, NaiveDate};

/// Trim; blank becomes `None`
pub fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Split a comma separated list, trimming entries and dropping empty ones
pub fn split_skills<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.as_ref().split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some("  Acme ".into())), Some("Acme".into()));
        assert_eq!(optional_text(Some("   ".into())), None);
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2020-02-29"), NaiveDate::from_ymd_opt(2020, 2, 29));
        assert_eq!(parse_date("2021-06-01T12:00:00Z"), NaiveDate::from_ymd_opt(2021, 6, 1));
        assert_eq!(parse_date("2021-02-30"), None);
        assert_eq!(parse_date("last year"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(split_skills(&["Rust, SQL ,,  Go"]), vec!["Rust", "SQL", "Go"]);
        assert_eq!(split_skills(&["HTML", " CSS "]), vec!["HTML", "CSS"]);
        assert!(split_skills(&[" , "]).is_empty());
    }
}
