pub mod chart_data;
pub mod chart_lifecycle;

pub use chart_data::*;
pub use chart_lifecycle::*;
