//! Date display helpers for upload timestamps and task due dates.
//!
//! Servers send either RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS`
//! timestamps, or plain dates. Only the calendar date is displayed, so the
//! leading `YYYY-MM-DD` is all that gets parsed.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::macros::format_description;

/// Parse the calendar date at the start of `raw`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let head = raw.trim().get(..10)?;
    match Date::parse(head, format_description!("[year]-[month]-[day]")) {
        Ok(date) => Some(date),
        Err(_) => None,
    }
}

/// Format as `Mar 5, 2025`. Unparsable input is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let Some(date) = parse_date(raw) else {
        return raw.to_owned();
    };
    match date.format(format_description!("[month repr:short] [day padding:none], [year]")) {
        Ok(formatted) => formatted,
        Err(_) => raw.to_owned(),
    }
}

/// Due-date cell text; `None` renders a placeholder.
#[must_use]
pub fn format_due_date(due: Option<&str>) -> String {
    match due {
        Some(raw) if !raw.trim().is_empty() => format_date(raw),
        _ => "No due date".to_owned(),
    }
}
