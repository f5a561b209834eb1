pub mod canvas_renderer;
pub mod geometry;

pub use canvas_renderer::{CanvasLineChart, CanvasLineRenderer};
