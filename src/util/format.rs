//! Display formatting for labels, percentages, and message clocks.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Local, NaiveDateTime};

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a metric the way the analytics server sends it: integers without a
/// fractional part, everything else rounded to one decimal.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// `42` -> `"42%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// Clamp a value into a 0..=100 fill width.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

/// `"3 users online"`, `"1 user online"`.
pub fn online_label(count: u64) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} user{plural} online")
}

/// Local wall-clock time with seconds, e.g. `02:05:09 PM`.
///
/// Returns an empty string when the timestamp cannot be parsed.
pub fn clock_time(timestamp: &str) -> String {
    parse_timestamp(timestamp).map_or_else(String::new, |t| t.format("%I:%M:%S %p").to_string())
}

/// Local wall-clock time without seconds, e.g. `02:05 PM`.
pub fn short_clock_time(timestamp: &str) -> String {
    parse_timestamp(timestamp).map_or_else(String::new, |t| t.format("%I:%M %p").to_string())
}

/// Parse an RFC 3339 timestamp (converted to local time) or a naive ISO
/// timestamp, which is taken as already local.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    let mut last_err = None;
    for fmt in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(raw, fmt) {
            Ok(parsed) => return Some(parsed),
            Err(err) => last_err = Some(err),
        }
    }
    if let Some(err) = last_err {
        log::debug!("unparseable timestamp {raw:?}: {err}");
    }
    None
}

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
