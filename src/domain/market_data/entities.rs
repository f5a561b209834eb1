use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw price history as supplied by the data source: `[[unix_seconds, price], ...]`.
///
/// Entries stay as JSON values so a malformed element reaches the chart transforms
/// instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Deref, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Value>);

impl Series {
    pub fn new(entries: Vec<Value>) -> Self {
        Self(entries)
    }

    /// Build a well-formed series from `(seconds, price)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self(pairs.iter().map(|&(ts, price)| serde_json::json!([ts, price])).collect())
    }

    pub fn entries(&self) -> &[Value] {
        &self.0
    }

    /// Seconds between the first and last timestamps, if both are numeric.
    pub fn span_seconds(&self) -> Option<f64> {
        let first = self.0.first()?.get(0)?.as_f64()?;
        let last = self.0.last()?.get(0)?.as_f64()?;
        Some((last - first).abs())
    }
}

/// Response body shapes accepted from the price-history endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeriesPayload {
    Bare(Series),
    Wrapped { prices: Series },
}

impl From<SeriesPayload> for Series {
    fn from(payload: SeriesPayload) -> Self {
        match payload {
            SeriesPayload::Bare(series) | SeriesPayload::Wrapped { prices: series } => series,
        }
    }
}
