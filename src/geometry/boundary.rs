use crate::error::{PlacementError, Result};
use crate::math::{Point2, Vector2};

/// An ordered run of site vertices; consecutive points form the segments a
/// placement walk visits.
///
/// Construction does not validate: degenerate segments surface when
/// [`Boundary::segment`] builds them, so a walk fails exactly where the bad
/// pair sits.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    points: Vec<Point2>,
}

impl Boundary {
    /// Creates a boundary from its vertices in walk order.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// The vertices in walk order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of segments between consecutive vertices.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// True if the first and last vertices coincide exactly.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 2 && first == last,
            _ => false,
        }
    }

    /// Builds the segment from vertex `index` to vertex `index + 1`.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::DegenerateSegment` if the two vertices
    /// coincide.
    ///
    /// # Panics
    ///
    /// Panics if `index + 1` is past the last vertex.
    pub fn segment(&self, index: usize) -> Result<Segment> {
        Segment::between(self.points[index], self.points[index + 1], index)
    }
}

/// A non-degenerate span between two consecutive boundary vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
    length: f64,
}

impl Segment {
    /// Creates a segment, rejecting coincident endpoints.
    ///
    /// The zero test is exact: callers divide by this length.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::DegenerateSegment` carrying `index` and the
    /// repeated point if the endpoints coincide.
    pub fn between(start: Point2, end: Point2, index: usize) -> Result<Self> {
        let length = (end - start).norm();
        if length == 0.0 {
            return Err(PlacementError::DegenerateSegment {
                index,
                x: start.x,
                y: start.y,
            }
            .into());
        }
        Ok(Self { start, end, length })
    }

    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Unit vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start) / self.length
    }
}
