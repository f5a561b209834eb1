use futures::future::LocalBoxFuture;

use crate::domain::errors::FetchResult;
use crate::domain::market_data::{CoinId, Series};

/// Query-by-identifier port for price history.
pub trait ChartDataSource {
    /// Fetch the price series for `coin_id`. Timestamps are unix seconds.
    fn fetch_series(&self, coin_id: &CoinId) -> LocalBoxFuture<'static, FetchResult<Series>>;
}
