pub mod boundary;
pub mod sector;

pub use boundary::{Boundary, Segment};
pub use sector::Sector;
