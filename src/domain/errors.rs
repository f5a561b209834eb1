use derive_more::{Display, From};

/// Failure reported by the chart data source.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    #[display(fmt = "Invalid coin id: {:?}", _0)]
    InvalidCoinId(String),
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP error: {} {}", status, status_text)]
    Status { status: u16, status_text: String },
    #[display(fmt = "Failed to decode chart data: {}", _0)]
    Decode(String),
    #[display(fmt = "Request timed out after {} ms", _0)]
    Timeout(u32),
}

/// Failure while reshaping a series into chart data.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum TransformError {
    #[display(fmt = "Malformed series entry at index {}: {}", index, reason)]
    MalformedEntry { index: usize, reason: &'static str },
    #[display(fmt = "Timestamp {} at index {} is outside the representable range", seconds, index)]
    InvalidTimestamp { index: usize, seconds: f64 },
}

/// Failure reported by a rendering engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RenderError {
    #[display(fmt = "Canvas context unavailable: {}", _0)]
    ContextUnavailable(String),
    #[display(fmt = "Draw failed: {}", _0)]
    Draw(String),
}

/// Top-level error for the wasm entry points.
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Fetch Error: {}", _0)]
    Fetch(FetchError),
    #[display(fmt = "Transform Error: {}", _0)]
    Transform(TransformError),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(RenderError),
}

impl std::error::Error for FetchError {}
impl std::error::Error for TransformError {}
impl std::error::Error for RenderError {}
impl std::error::Error for AppError {}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

// Simple convenience type aliases
pub type FetchResult<T> = Result<T, FetchError>;
pub type TransformResult<T> = Result<T, TransformError>;
pub type RenderingResult<T> = Result<T, RenderError>;
