#![cfg(target_arch = "wasm32")]

use chrono::Utc;
use price_graph_wasm::application::ChartLifecycle;
use price_graph_wasm::domain::chart::{
    ChartConfig, ChartData, ChartHandle, DEFAULT_DATASET_LABEL, DatasetStyle, RenderingEngine,
};
use price_graph_wasm::domain::market_data::Series;
use price_graph_wasm::infrastructure::CanvasLineRenderer;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn config() -> ChartConfig {
    let series = Series::from_pairs(&[(1000.0, 100.0), (2000.0, 110.0), (3000.0, 90.0)]);
    let data = ChartData::from_series(&series, &Utc).unwrap();
    ChartConfig::line(&data, DEFAULT_DATASET_LABEL, &DatasetStyle::default())
}

#[wasm_bindgen_test]
fn create_draws_and_destroy_detaches() {
    let canvas = canvas();
    let mut chart = CanvasLineRenderer::new().create(&canvas, &config()).unwrap();
    assert_eq!(chart.point_count(), 3);
    assert!(chart.is_listening());
    assert!(canvas.width() > 0 && canvas.height() > 0);

    chart.destroy();
    assert!(!chart.is_listening());
}

#[wasm_bindgen_test]
fn lifecycle_keeps_one_chart_per_canvas() {
    let canvas = canvas();
    let renderer = CanvasLineRenderer::new();
    let mut lifecycle = ChartLifecycle::new(renderer.clone());
    for _ in 0..3 {
        assert_eq!(lifecycle.rebind(Some(&canvas), &config()), Ok(true));
    }
    assert_eq!(lifecycle.created_count(), 3);
    assert_eq!(renderer.created_count(), 3);
    assert_eq!(renderer.destroyed_count(), 2);
    assert_eq!(renderer.live_count(), 1);
    assert!(lifecycle.bound_handle().unwrap().is_listening());

    assert!(lifecycle.release());
    assert!(!lifecycle.is_bound());
    assert_eq!(renderer.live_count(), 0);
}

#[wasm_bindgen_test]
fn destroying_twice_counts_once() {
    let canvas = canvas();
    let renderer = CanvasLineRenderer::new();
    let mut chart = renderer.create(&canvas, &config()).unwrap();
    chart.destroy();
    chart.destroy();
    assert_eq!(renderer.destroyed_count(), 1);
    assert_eq!(renderer.live_count(), 0);
}

fn mouse_move_at(canvas: &web_sys::HtmlCanvasElement, fraction_x: f64) {
    let rect = canvas.get_bounding_client_rect();
    let init = MouseEventInit::new();
    init.set_client_x((rect.left() + rect.width() * fraction_x) as i32);
    init.set_client_y((rect.top() + rect.height() / 2.0) as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    canvas.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn hover_follows_the_nearest_point() {
    let canvas = canvas();
    let chart = CanvasLineRenderer::new().create(&canvas, &config()).unwrap();
    assert_eq!(chart.hovered_index(), None);

    mouse_move_at(&canvas, 0.5);
    assert_eq!(chart.hovered_index(), Some(1));
    mouse_move_at(&canvas, 0.99);
    assert_eq!(chart.hovered_index(), Some(2));

    canvas.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(chart.hovered_index(), None);
}

#[wasm_bindgen_test]
fn destroyed_chart_ignores_hover() {
    let canvas = canvas();
    let mut chart = CanvasLineRenderer::new().create(&canvas, &config()).unwrap();
    chart.destroy();
    mouse_move_at(&canvas, 0.5);
    assert_eq!(chart.hovered_index(), None);
}

#[wasm_bindgen_test]
fn empty_config_draws_without_error() {
    let canvas = canvas();
    let chart = CanvasLineRenderer::new().create(&canvas, &ChartConfig::default());
    assert_eq!(chart.map(|c| c.point_count()).ok(), Some(0));
}
