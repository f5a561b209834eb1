use chrono::TimeZone;
use serde_json::Value;
use std::fmt::Display;

use crate::domain::chart::{DataPoints, Labels};
use crate::domain::errors::{TransformError, TransformResult};
use crate::domain::market_data::Series;
use crate::time_utils::{format_clock_label, seconds_to_millis};

/// Borrow the `[timestamp, price, ..]` items of one series entry.
fn pair_at(index: usize, entry: &Value) -> TransformResult<&[Value]> {
    let items = entry
        .as_array()
        .ok_or(TransformError::MalformedEntry { index, reason: "entry is not an array" })?;
    if items.len() < 2 {
        return Err(TransformError::MalformedEntry {
            index,
            reason: "expected a [timestamp, price] pair",
        });
    }
    Ok(items)
}

/// Project the price of every entry. Fails as a whole on the first malformed entry.
pub fn extract_data_points(series: &Series) -> TransformResult<DataPoints> {
    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            pair_at(index, entry)?[1]
                .as_f64()
                .ok_or(TransformError::MalformedEntry { index, reason: "price is not a number" })
        })
        .collect()
}

/// Project every timestamp (unix seconds) to an `HH:mm` label in `tz`.
pub fn extract_labels<Tz>(series: &Series, tz: &Tz) -> TransformResult<Labels>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let seconds = pair_at(index, entry)?[0].as_f64().ok_or(
                TransformError::MalformedEntry { index, reason: "timestamp is not a number" },
            )?;
            seconds_to_millis(seconds)
                .and_then(|millis| format_clock_label(millis, tz))
                .ok_or(TransformError::InvalidTimestamp { index, seconds })
        })
        .collect()
}
