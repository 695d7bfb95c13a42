// Utility functions
use chrono::NaiveDate;

/// Parses an ISO-8601 `YYYY-MM-DD` date string.
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
}
