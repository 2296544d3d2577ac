use chrono::NaiveDate;

use anyhow::Result;

/// Pure
#[must_use] pub fn format_date(date: NaiveDate) -> String {
    date.format("%F").to_string()
}

/// Pure
///
/// # Errors
/// Returns an error if the string cannot be parsed as a date
pub fn parse_date(date_string: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date_string, "%F")?)
}
