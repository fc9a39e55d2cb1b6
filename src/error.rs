use thiserror::Error;

/// Top-level error type for the Perimetra planning kernel.
#[derive(Debug, Error)]
pub enum PerimetraError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Errors raised while placing sensors along a boundary.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("boundary has {points} point(s), need at least 2")]
    InvalidBoundary { points: usize },

    #[error("degenerate segment {index}: repeated point ({x}, {y})")]
    DegenerateSegment { index: usize, x: f64, y: f64 },

    #[error("invalid sensor spec: {parameter} = {value} is out of range ({min}, {max}]")]
    InvalidSensorSpec {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors raised while reading serialized geometry.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("malformed WKT: {0}")]
    Wkt(String),
}

/// Errors raised by coordinate reprojection.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("UTM zone {0} is out of range [1, 60]")]
    InvalidZone(u8),

    #[error("latitude {0} is outside the transverse Mercator band [-84, 84]")]
    LatitudeOutOfBand(f64),
}

/// Convenience type alias for results using [`PerimetraError`].
pub type Result<T> = std::result::Result<T, PerimetraError>;
