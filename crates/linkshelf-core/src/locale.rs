//! Fixed `zh-CN` date formatting.
//!
//! The listing uses one locale only. Display dates follow the long
//! Chinese form without zero padding (`2024年5月1日`) and weekdays use
//! the `星期X` names.

use chrono::{Datelike, NaiveDate, Weekday};

/// Parse an ISO `YYYY-MM-DD` date string, tolerating surrounding whitespace.
///
/// Only the zero-padded form is accepted. chrono would also read
/// `2024-5-1`, which would then share a group key with `2024-05-01`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == trimmed).then_some(date)
}

/// Long-form display date, e.g. `2024年5月1日`.
pub fn display_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Localized weekday name, e.g. `星期三`.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}
