//! Chart aggregate: derived chart data, chart configuration and the rendering-engine port.

pub mod entities;
pub mod rendering;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use rendering::*;
pub use services::*;
pub use value_objects::*;
