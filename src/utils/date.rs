//! Date rendering.

use chrono::{Local, NaiveDate};

const DATE_FORMAT: &str = "%B %-d, %Y";

/// Render as `December 25, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date on the local clock.
pub fn format_today() -> String {
    format_date(Local::now().date_naive())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}
