use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

use crate::domain::errors::FetchError;

/// Value Object - identifier of a coin on the price-history service (`bitcoin`, `usd-coin`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct CoinId(String);

impl CoinId {
    /// Trims surrounding whitespace. Ids are used verbatim as a URL path segment, so only
    /// ASCII alphanumerics, `-`, `_` and `.` are accepted.
    pub fn new(id: &str) -> Result<Self, FetchError> {
        let trimmed = id.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(FetchError::InvalidCoinId(id.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
