use leptos::*;
use std::rc::Rc;

use crate::config::config;
use crate::domain::{
    errors::FetchError,
    market_data::{ChartDataSource, CoinId, Series},
};
use crate::infrastructure::HttpChartDataSource;

/// Data source shared through Leptos context.
#[derive(Clone)]
pub struct ChartDataSourceContext(pub Rc<dyn ChartDataSource>);

/// Make `source` the data source of every price graph below the current owner.
pub fn provide_chart_data_source(source: impl ChartDataSource + 'static) {
    provide_context(ChartDataSourceContext(Rc::new(source)));
}

/// Reactive view of one price-history query.
#[derive(Clone, Copy)]
pub struct ChartQuery {
    /// Latest successful series. Kept while a refetch is in flight.
    pub data: Signal<Option<Series>>,
    /// Error of the latest response, if it failed.
    pub error: Signal<Option<FetchError>>,
    /// True until the first response for this query arrives.
    pub is_loading: Signal<bool>,
}

/// Query price history for `coin_id`, refetching whenever the id changes.
pub fn use_chart_data(coin_id: Signal<String>) -> ChartQuery {
    let source = use_context::<ChartDataSourceContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Rc::new(HttpChartDataSource::from_config(config())));

    let response = create_local_resource(
        move || coin_id.get(),
        move |id: String| {
            let source = Rc::clone(&source);
            async move {
                match CoinId::new(&id) {
                    Ok(coin) => source.fetch_series(&coin).await,
                    Err(err) => Err(err),
                }
            }
        },
    );

    let data = create_memo(move |_| response.get().and_then(Result::ok));
    let error = create_memo(move |_| response.get().and_then(Result::err));
    let is_loading = create_memo(move |_| response.loading().get() && response.get().is_none());

    ChartQuery { data: data.into(), error: error.into(), is_loading: is_loading.into() }
}
