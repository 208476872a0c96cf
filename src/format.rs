// src/format.rs

//! Presentation helpers for the CLI summary output.

use chrono::DateTime;

/// Turns an account-creation timestamp (RFC 3339) into a human age phrase
/// and a long-form creation date, e.g. `("2 years, 3 months",
/// "March 14, 2024")`.
///
/// Returns `None` when the timestamp is missing or unparseable.
pub fn format_account_age(created_at: &str) -> Option<(String, String)> {
    let created = DateTime::parse_from_rfc3339(created_at).ok()?;
    let now = chrono::Utc::now().with_timezone(&created.timezone());
    let days = (now - created).num_days().max(0);
    let date = created.format("%B %d, %Y").to_string();
    Some((age_phrase(days), date))
}

/// Calendar-approximate phrasing of an age in days: whole years, then
/// 30-day months, with leftover days shown only for sub-year ages.
fn age_phrase(days: i64) -> String {
    let years = days / 365;
    let months = (days % 365) / 30;
    let leftover = days % 30;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(plural(years, "year"));
    }
    if months > 0 {
        parts.push(plural(months, "month"));
    }
    if leftover > 0 && years == 0 {
        parts.push(plural(leftover, "day"));
    }
    if parts.is_empty() {
        "Less than a day".to_owned()
    } else {
        parts.join(", ")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Formats an integer with thousands separators: `1234567` → `1,234,567`.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
