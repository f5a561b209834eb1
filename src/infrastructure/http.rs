use futures::future::{Either, FutureExt, LocalBoxFuture, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::AppConfig;
use crate::domain::{
    errors::{FetchError, FetchResult},
    logging::LogComponent,
    market_data::{ChartDataSource, CoinId, Series, SeriesPayload},
};
use crate::{log_info, log_warn};

/// Price-history client for `{base}/coins/{id}/market_chart`.
///
/// The endpoint answers with `[[unix_seconds, price], ...]`, either bare or under a
/// `prices` key.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpChartDataSource {
    base_url: String,
    vs_currency: String,
    days: u32,
    timeout_ms: u32,
}

impl HttpChartDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let defaults = AppConfig::default();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            vs_currency: defaults.vs_currency,
            days: defaults.days,
            timeout_ms: defaults.request_timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.as_str())
            .with_vs_currency(&config.vs_currency)
            .with_days(config.days)
            .with_timeout_ms(config.request_timeout_ms)
    }

    pub fn with_vs_currency(mut self, vs_currency: &str) -> Self {
        self.vs_currency = vs_currency.to_string();
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn market_chart_url(&self, coin_id: &CoinId) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            coin_id.value(),
            self.vs_currency,
            self.days
        )
    }

    async fn request(url: String) -> FetchResult<Series> {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let payload: SeriesPayload = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(payload.into())
    }
}

impl ChartDataSource for HttpChartDataSource {
    fn fetch_series(&self, coin_id: &CoinId) -> LocalBoxFuture<'static, FetchResult<Series>> {
        let url = self.market_chart_url(coin_id);
        let timeout_ms = self.timeout_ms;

        async move {
            log_info!(LogComponent::Infrastructure("HttpChartDataSource"), "📡 Fetching {}", url);

            let request = Self::request(url.clone());
            let timeout = TimeoutFuture::new(timeout_ms);
            futures::pin_mut!(request, timeout);

            match select(request, timeout).await {
                Either::Left((Ok(series), _)) => {
                    log_info!(
                        LogComponent::Infrastructure("HttpChartDataSource"),
                        "✅ Loaded {} price points",
                        series.len()
                    );
                    Ok(series)
                }
                Either::Left((Err(err), _)) => Err(err),
                Either::Right(((), _)) => {
                    log_warn!(
                        LogComponent::Infrastructure("HttpChartDataSource"),
                        "⏱️ {} did not answer within {} ms",
                        url,
                        timeout_ms
                    );
                    Err(FetchError::Timeout(timeout_ms))
                }
            }
        }
        .boxed_local()
    }
}
