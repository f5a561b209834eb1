pub mod http;
pub mod rendering;
pub mod services;

pub use http::HttpChartDataSource;
pub use rendering::{CanvasLineChart, CanvasLineRenderer};
pub use services::{BrowserTimeProvider, ConsoleLogger};
