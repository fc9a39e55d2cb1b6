pub mod placement;

pub use placement::{Coverage, PlaceSensors, PlacementPolicy};
