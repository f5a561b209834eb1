use chrono::TimeZone;
use std::fmt::Display;

use crate::domain::chart::ChartDataState;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Series;
use crate::{log_debug, log_error};

/// Feed the latest series into `state`, logging a failed derivation.
///
/// Returns `true` when the chart data was replaced and the chart should be rebuilt.
pub fn apply_series<Tz>(state: &mut ChartDataState, series: Option<&Series>, tz: &Tz) -> bool
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match state.apply(series, tz) {
        Ok(true) => {
            log_debug!(
                LogComponent::Application("ChartData"),
                "📊 Derived {} points (revision {})",
                state.current().len(),
                state.revision()
            );
            true
        }
        Ok(false) => false,
        Err(err) => {
            log_error!(
                LogComponent::Application("ChartData"),
                "There was an error processing chart data: {}",
                err
            );
            false
        }
    }
}
