use leptos::*;

use crate::domain::{errors::AppError, market_data::CoinId};
use crate::presentation::{PriceGraph, price_graph::PRICE_GRAPH_STYLES};

/// 🦀 Root component: one price graph for `coin_id`
#[component]
pub fn App(#[prop(into)] coin_id: String) -> impl IntoView {
    let title = format!("{} price", coin_id);

    view! {
        <style>{PRICE_GRAPH_STYLES}</style>
        <main class="price-graph-app">
            <h2 class="price-graph-title">{title}</h2>
            <PriceGraph coin_id=coin_id/>
        </main>
    }
}

/// Coin to chart: the requested one, else `fallback`. Either must be a valid id.
pub fn resolve_coin_id(requested: Option<String>, fallback: &str) -> Result<CoinId, AppError> {
    let coin_id = CoinId::new(requested.as_deref().unwrap_or(fallback))?;
    Ok(coin_id)
}

/// Mount [`App`] onto `<body>`.
pub fn mount(coin_id: &CoinId) {
    let coin_id = coin_id.value().to_string();
    mount_to_body(move || view! { <App coin_id=coin_id/> });
}
