//! Human-readable formatting for tables and feeds.
//!
//! Inputs are ISO-8601 strings as returned by the backend
//! (e.g. "2026-01-20T21:35:00Z" or "2026-01-20").

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATE_FORMAT: &str = "%b %-d, %Y";
const TIME_FORMAT: &str = "%-I:%M %p";

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
        .ok()
}

/// Format as "Jan 20, 2026". Unparseable input is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    if let Some(ts) = parse_timestamp(date_str) {
        return ts.format(DATE_FORMAT).to_string();
    }
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(d) => d.format(DATE_FORMAT).to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format as "Jan 20, 2026 9:35 PM" in UTC.
///
/// Falls back to `format_date` when there is no time portion.
pub fn format_datetime(date_str: &str) -> String {
    match parse_timestamp(date_str) {
        Some(ts) => format!(
            "{} {}",
            ts.format(DATE_FORMAT),
            ts.format(TIME_FORMAT)
        ),
        None => format_date(date_str),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Relative age for activity feeds ("5 minutes ago").
///
/// Anything older than six days is shown as a date.
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(ts);
    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }
    if elapsed.num_hours() < 1 {
        return plural(elapsed.num_minutes(), "minute");
    }
    if elapsed.num_days() < 1 {
        return plural(elapsed.num_hours(), "hour");
    }
    if elapsed.num_days() <= 6 {
        return plural(elapsed.num_days(), "day");
    }
    ts.format(DATE_FORMAT).to_string()
}

/// "ORG_ADMIN" -> "Org Admin".
pub fn format_role_label(role: &str) -> String {
    role.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
