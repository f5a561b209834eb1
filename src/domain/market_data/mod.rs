//! Market data aggregate: coin identifiers, raw price series and the data source port.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
