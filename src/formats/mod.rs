pub mod kml;
pub mod wkt;
