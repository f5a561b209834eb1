use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Largest magnitude, in milliseconds, a browser `Date` accepts.
pub const MAX_DATE_MILLIS: f64 = 8.64e15;

/// Convert unix seconds to whole milliseconds.
///
/// Fractional milliseconds truncate toward zero. Returns `None` for non-finite input or
/// anything outside the range of a browser `Date`.
pub fn seconds_to_millis(seconds: f64) -> Option<i64> {
    let millis = (seconds * 1000.0).trunc();
    if !millis.is_finite() || millis.abs() > MAX_DATE_MILLIS {
        return None;
    }
    Some(millis as i64)
}

/// Format a point in time as a 24-hour `HH:mm` clock label in `tz`.
pub fn format_clock_label<Tz>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let utc = DateTime::from_timestamp_millis(millis)?;
    Some(utc.with_timezone(tz).format("%H:%M").to_string())
}

/// Human readable length of a time span, e.g. `about 7 hours`.
pub fn format_distance(seconds: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const MONTH: u64 = 30 * DAY;
    const YEAR: u64 = 365 * DAY;

    let plural = |n: u64, unit: &str| {
        if n == 1 { format!("1 {unit}") } else { format!("{n} {unit}s") }
    };

    // Round to the nearest minute before bucketing.
    let minutes = seconds.saturating_add(30) / MINUTE;
    match seconds {
        s if s < 30 => "less than a minute".to_string(),
        s if s < 45 * MINUTE => plural(minutes.max(1), "minute"),
        s if s < 90 * MINUTE => "about 1 hour".to_string(),
        s if s < DAY => format!("about {} hours", (s + HOUR / 2) / HOUR),
        s if s < 42 * HOUR => "1 day".to_string(),
        s if s < MONTH => plural((s + DAY / 2) / DAY, "day"),
        s if s < 2 * MONTH => "about 1 month".to_string(),
        s if s < YEAR => plural((s + MONTH / 2) / MONTH, "month"),
        s => format!("about {}", plural(s.saturating_add(YEAR / 2) / YEAR, "year")),
    }
}
