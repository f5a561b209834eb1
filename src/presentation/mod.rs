pub mod chart_query;
pub mod loading;
pub mod price_graph;

pub use chart_query::*;
pub use loading::Loading;
pub use price_graph::{DEFAULT_CANVAS_ID, PriceGraph, graph_caption, provide_canvas_renderer};
