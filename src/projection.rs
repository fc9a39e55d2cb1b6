use crate::error::{ProjectionError, Result};
use crate::math::Point2;

// WGS84 ellipsoid.
const SEMI_MAJOR: f64 = 6_378_137.0;
const FLATTENING: f64 = 1.0 / 298.257_223_563;
/// First eccentricity squared.
const E2: f64 = FLATTENING * (2.0 - FLATTENING);
/// Second eccentricity squared.
const EP2: f64 = E2 / (1.0 - E2);
/// Central meridian scale factor.
const SCALE: f64 = 0.9996;
const FALSE_EASTING: f64 = 500_000.0;

/// Transverse Mercator projection for a single UTM zone on WGS84, northern
/// hemisphere.
///
/// Geographic points are `(longitude, latitude)` in degrees; planar points
/// are `(easting, northing)` in meters. Uses the USGS series expansion, good
/// to well under a millimeter inside the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtmProjection {
    zone: u8,
}

impl UtmProjection {
    /// Creates the projection for a UTM zone.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::InvalidZone` unless `zone` is in `[1, 60]`.
    pub fn new(zone: u8) -> Result<Self> {
        if !(1..=60).contains(&zone) {
            return Err(ProjectionError::InvalidZone(zone).into());
        }
        Ok(Self { zone })
    }

    #[must_use]
    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// Central meridian of the zone, in radians.
    fn central_meridian(&self) -> f64 {
        (f64::from(self.zone) * 6.0 - 183.0).to_radians()
    }

    /// Projects a geographic `(lon, lat)` point to planar `(x, y)` meters.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::LatitudeOutOfBand` if the latitude is
    /// outside `[-84, 84]` degrees, where the series diverges.
    pub fn to_planar(&self, geographic: &Point2) -> Result<Point2> {
        let lat = geographic.y;
        if !(-84.0..=84.0).contains(&lat) {
            return Err(ProjectionError::LatitudeOutOfBand(lat).into());
        }
        let phi = lat.to_radians();
        let lam = geographic.x.to_radians();

        let n = SEMI_MAJOR / (1.0 - E2 * phi.sin().powi(2)).sqrt();
        let t = phi.tan().powi(2);
        let c = EP2 * phi.cos().powi(2);
        let a = (lam - self.central_meridian()) * phi.cos();
        let m = meridional_arc(phi);

        let x = FALSE_EASTING
            + SCALE
                * n
                * (a + (1.0 - t + c) * a.powi(3) / 6.0
                    + (5.0 - 18.0 * t + t.powi(2) + 72.0 * c - 58.0 * EP2) * a.powi(5) / 120.0);
        let y = SCALE
            * (m + n
                * phi.tan()
                * (a.powi(2) / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c.powi(2)) * a.powi(4) / 24.0
                    + (61.0 - 58.0 * t + t.powi(2) + 600.0 * c - 330.0 * EP2) * a.powi(6)
                        / 720.0));
        Ok(Point2::new(x, y))
    }

    /// Inverse projection from planar `(x, y)` meters back to geographic
    /// `(lon, lat)` degrees.
    #[must_use]
    pub fn to_geographic(&self, planar: &Point2) -> Point2 {
        let e1 = (1.0 - (1.0 - E2).sqrt()) / (1.0 + (1.0 - E2).sqrt());
        let m = planar.y / SCALE;
        let mu =
            m / (SEMI_MAJOR * (1.0 - E2 / 4.0 - 3.0 * E2 * E2 / 64.0 - 5.0 * E2 * E2 * E2 / 256.0));
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let c1 = EP2 * phi1.cos().powi(2);
        let t1 = phi1.tan().powi(2);
        let sin_sq = 1.0 - E2 * phi1.sin().powi(2);
        let n1 = SEMI_MAJOR / sin_sq.sqrt();
        let r1 = SEMI_MAJOR * (1.0 - E2) / sin_sq.powf(1.5);
        let d = (planar.x - FALSE_EASTING) / (n1 * SCALE);

        let phi = phi1
            - (n1 * phi1.tan() / r1)
                * (d.powi(2) / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1.powi(2) - 9.0 * EP2) * d.powi(4)
                        / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1.powi(2)
                        - 252.0 * EP2
                        - 3.0 * c1.powi(2))
                        * d.powi(6)
                        / 720.0);
        let lam = self.central_meridian()
            + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1.powi(2) + 8.0 * EP2 + 24.0 * t1.powi(2))
                    * d.powi(5)
                    / 120.0)
                / phi1.cos();
        Point2::new(lam.to_degrees(), phi.to_degrees())
    }

    /// Projects every point of a geographic ring to planar coordinates.
    ///
    /// # Errors
    ///
    /// Fails on the first point with a latitude outside the series band.
    pub fn ring_to_planar(&self, ring: &[Point2]) -> Result<Vec<Point2>> {
        ring.iter().map(|p| self.to_planar(p)).collect()
    }

    /// Unprojects every point of a planar ring to geographic coordinates.
    #[must_use]
    pub fn ring_to_geographic(&self, ring: &[Point2]) -> Vec<Point2> {
        ring.iter().map(|p| self.to_geographic(p)).collect()
    }
}

/// Meridional arc length from the equator to latitude `phi` (radians).
fn meridional_arc(phi: f64) -> f64 {
    SEMI_MAJOR
        * ((1.0 - E2 / 4.0 - 3.0 * E2 * E2 / 64.0 - 5.0 * E2 * E2 * E2 / 256.0) * phi
            - (3.0 * E2 / 8.0 + 3.0 * E2 * E2 / 32.0 + 45.0 * E2 * E2 * E2 / 1024.0)
                * (2.0 * phi).sin()
            + (15.0 * E2 * E2 / 256.0 + 45.0 * E2 * E2 * E2 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * E2 * E2 * E2 / 3072.0) * (6.0 * phi).sin())
}
