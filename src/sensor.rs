use std::fmt;

use crate::error::{PlacementError, Result};

/// Field-of-view and range of a single sensor model.
///
/// `range` is the sensing distance in boundary units; `fov_deg` is the
/// half-angle of the wedge in degrees, swept to both sides of the facing
/// direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSpec {
    range: f64,
    fov_deg: f64,
}

impl SensorSpec {
    /// Creates a validated sensor spec.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::InvalidSensorSpec` unless `range` is finite
    /// and positive and `fov_deg` is finite and in `(0, 180]`.
    pub fn new(range: f64, fov_deg: f64) -> Result<Self> {
        if !range.is_finite() || range <= 0.0 {
            return Err(PlacementError::InvalidSensorSpec {
                parameter: "range",
                value: range,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if !fov_deg.is_finite() || fov_deg <= 0.0 || fov_deg > 180.0 {
            return Err(PlacementError::InvalidSensorSpec {
                parameter: "fov_deg",
                value: fov_deg,
                min: 0.0,
                max: 180.0,
            }
            .into());
        }
        Ok(Self { range, fov_deg })
    }

    /// Long-range, wide-wedge radar preset.
    #[must_use]
    pub fn radar() -> Self {
        Self {
            range: 200.0,
            fov_deg: 45.0,
        }
    }

    /// Short-range, narrow-wedge camera preset.
    #[must_use]
    pub fn camera() -> Self {
        Self {
            range: 50.0,
            fov_deg: 10.0,
        }
    }

    /// Sensing distance in boundary units.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Wedge half-angle in degrees.
    #[must_use]
    pub fn fov_deg(&self) -> f64 {
        self.fov_deg
    }
}

impl Default for SensorSpec {
    fn default() -> Self {
        Self {
            range: 20.0,
            fov_deg: 10.0,
        }
    }
}

/// Catalog sensor models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Radar,
    Camera,
}

impl SensorKind {
    /// The catalog spec for this sensor model.
    #[must_use]
    pub fn spec(self) -> SensorSpec {
        match self {
            Self::Radar => SensorSpec::radar(),
            Self::Camera => SensorSpec::camera(),
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radar => write!(f, "Radar"),
            Self::Camera => write!(f, "Camera"),
        }
    }
}
