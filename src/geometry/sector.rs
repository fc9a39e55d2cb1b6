use crate::math::{Point2, Vector2};
use crate::sensor::SensorSpec;

/// A sensor's coverage wedge: apex at the sensor position, fanned out along
/// its facing direction.
///
/// The ring is a closed polygon (first == last vertex) built from the apex
/// and `ceil(fov_deg / 4)` chord points per side. Fan angles step through
/// `fov / s` for `s = 1..=n`, so spacing tightens toward the axis rather
/// than sweeping uniformly; placement distances downstream depend on these
/// exact vertices.
#[derive(Debug, Clone)]
pub struct Sector {
    apex: Point2,
    direction: Vector2,
    ring: Vec<Point2>,
}

impl Sector {
    /// Builds the wedge for a sensor at `apex` facing `direction` (unit).
    #[must_use]
    pub fn build(apex: Point2, direction: Vector2, spec: &SensorSpec) -> Self {
        let t = spec.fov_deg().to_radians();
        let x = direction.x * spec.range();
        let y = direction.y * spec.range();
        // fov_deg is validated to (0, 180], so n is in [1, 45].
        #[allow(clippy::cast_possible_truncation)]
        let n = (spec.fov_deg() / 4.0).ceil() as i32;

        let mut ring = vec![apex];
        for s in 1..=n {
            ring.push(rotated_about(x, y, t / f64::from(s), &apex));
        }
        for s in -n..=-1 {
            ring.push(rotated_about(x, y, t / f64::from(s), &apex));
        }
        ring.push(apex);

        Self {
            apex,
            direction,
            ring,
        }
    }

    /// Sensor position.
    #[must_use]
    pub fn apex(&self) -> &Point2 {
        &self.apex
    }

    /// Unit facing direction.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Closed coverage ring (first == last vertex).
    #[must_use]
    pub fn ring(&self) -> &[Point2] {
        &self.ring
    }
}

/// Rotates the vector `(x, y)` by `angle` and anchors it at `origin`.
fn rotated_about(x: f64, y: f64, angle: f64, origin: &Point2) -> Point2 {
    let (sin_a, cos_a) = angle.sin_cos();
    Point2::new(
        x * cos_a - y * sin_a + origin.x,
        y * cos_a + x * sin_a + origin.y,
    )
}
