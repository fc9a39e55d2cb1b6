pub mod error;
pub mod formats;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod projection;
pub mod sensor;
pub mod site;

pub use error::{PerimetraError, Result};
