use chrono::Local;
use leptos::html::Canvas;
use leptos::*;

use super::{Loading, use_chart_data};
use crate::application::{ChartLifecycle, apply_series};
use crate::domain::{
    chart::{ChartConfig, ChartDataState, DEFAULT_DATASET_LABEL, DatasetStyle},
    logging::LogComponent,
};
use crate::infrastructure::CanvasLineRenderer;
use crate::log_error;
use crate::time_utils::format_distance;

/// Id given to the chart canvas unless the caller picks another.
pub const DEFAULT_CANVAS_ID: &str = "coinChart";

pub const PRICE_GRAPH_STYLES: &str = r#"
.center-panel {
    display: flex;
    flex-direction: column;
    justify-content: center;
    min-height: 420px;
    padding: 16px;
}
.line-graph {
    position: relative;
    width: 100%;
    height: 400px;
}
.line-graph canvas {
    width: 100%;
    height: 100%;
}
.graph-caption {
    margin: 8px 0 0;
    color: #666666;
    font-size: 12px;
    text-align: center;
}
.flex { display: flex; }
.justify-center { justify-content: center; }
.items-center { align-items: center; }
.h-full { height: 100%; }
.loading {
    display: flex;
    align-items: center;
    gap: 8px;
    color: #666666;
}
.loading__spinner {
    width: 24px;
    height: 24px;
    border: 3px solid rgba(0, 0, 0, 0.1);
    border-top-color: rgb(54, 162, 235);
    border-radius: 50%;
    animation: price-graph-spin 0.8s linear infinite;
}
@keyframes price-graph-spin {
    to { transform: rotate(360deg); }
}
"#;

/// Make `renderer` draw every price graph below the current owner.
pub fn provide_canvas_renderer(renderer: CanvasLineRenderer) {
    provide_context(renderer);
}

/// Caption under the chart, describing the window of the last accepted series.
pub fn graph_caption(state: &ChartDataState) -> Option<String> {
    state.span_seconds().map(|span| format!("Last {}", format_distance(span)))
}

/// Line chart of the recent price history of one coin.
#[component]
pub fn PriceGraph(
    /// Coin identifier on the price-history service, e.g. `bitcoin`.
    #[prop(into)]
    coin_id: MaybeSignal<String>,
    /// Id of the rendered canvas.
    #[prop(optional, into)]
    canvas_id: Option<String>,
) -> impl IntoView {
    let query = use_chart_data(Signal::derive(move || coin_id.get()));
    let canvas_ref = create_node_ref::<Canvas>();
    let canvas_id = canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string());

    create_effect(move |_| {
        if let Some(err) = query.error.get() {
            log_error!(
                LogComponent::Presentation("PriceGraph"),
                "There was an error displaying the graph: {}",
                err
            );
        }
    });

    // Prices and labels are derived together; the revision drives the chart rebuild.
    let chart_data = store_value(ChartDataState::default());
    let data_revision = create_rw_signal(0u64);

    create_effect(move |_| {
        let series = query.data.get();
        let mut updated = false;
        chart_data.update_value(|state| updated = apply_series(state, series.as_ref(), &Local));
        if updated {
            data_revision.set(chart_data.with_value(ChartDataState::revision));
        }
    });

    let renderer = use_context::<CanvasLineRenderer>().unwrap_or_default();
    let lifecycle = store_value(ChartLifecycle::new(renderer));

    // Rebinds on every data revision and whenever the canvas is (re)mounted.
    create_effect(move |_| {
        data_revision.track();
        let canvas = canvas_ref.get();
        let config = chart_data.with_value(|state| {
            ChartConfig::line(state.current(), DEFAULT_DATASET_LABEL, &DatasetStyle::default())
        });
        lifecycle.update_value(|lifecycle| {
            if let Err(err) = lifecycle.rebind(canvas.as_deref(), &config) {
                log_error!(
                    LogComponent::Presentation("PriceGraph"),
                    "Failed to draw the graph: {}",
                    err
                );
            }
        });
    });

    on_cleanup(move || {
        lifecycle.try_update_value(|lifecycle| lifecycle.release());
    });

    let caption = move || {
        data_revision.track();
        chart_data.with_value(graph_caption)
    };

    view! {
        <div class="center-panel">
            {move || {
                if query.is_loading.get() {
                    view! {
                        <div class="flex justify-center items-center h-full">
                            <Loading/>
                        </div>
                    }
                        .into_view()
                } else {
                    view! {
                        <div class="line-graph">
                            <canvas id=canvas_id.clone() node_ref=canvas_ref></canvas>
                        </div>
                        <p class="graph-caption">{caption}</p>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
