use chrono::TimeZone;
use std::fmt::Display;

use crate::domain::chart::services::{extract_data_points, extract_labels};
use crate::domain::errors::TransformResult;
use crate::domain::market_data::Series;

/// Chart-ready prices, index-aligned with the series.
pub type DataPoints = Vec<f64>;
/// Chart-ready `HH:mm` labels, index-aligned with the series.
pub type Labels = Vec<String>;

/// Prices and labels derived from one series snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub data_points: DataPoints,
    pub labels: Labels,
}

impl ChartData {
    /// Derive both projections. Nothing is produced unless both succeed.
    pub fn from_series<Tz>(series: &Series, tz: &Tz) -> TransformResult<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let data_points = extract_data_points(series)?;
        let labels = extract_labels(series, tz)?;
        Ok(Self { data_points, labels })
    }

    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }
}

/// Derived chart data owned by one price graph.
#[derive(Debug, Clone, Default)]
pub struct ChartDataState {
    current: ChartData,
    span_seconds: Option<u64>,
    revision: u64,
}

impl ChartDataState {
    /// Apply the latest series.
    ///
    /// An absent series keeps the current data (`Ok(false)`). On failure the current data
    /// is kept untouched and the error returned. Every successful derivation bumps the
    /// revision, even when the values are unchanged.
    pub fn apply<Tz>(&mut self, series: Option<&Series>, tz: &Tz) -> TransformResult<bool>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(series) = series else {
            return Ok(false);
        };
        self.current = ChartData::from_series(series, tz)?;
        // Every timestamp passed the millisecond range check, so the span fits in u64.
        self.span_seconds = series.span_seconds().map(|span| span as u64);
        self.revision += 1;
        Ok(true)
    }

    pub fn current(&self) -> &ChartData {
        &self.current
    }

    /// Seconds between the first and last timestamps of the accepted series.
    pub fn span_seconds(&self) -> Option<u64> {
        self.span_seconds
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
