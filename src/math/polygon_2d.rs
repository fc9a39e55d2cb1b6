use super::{distance_2d::point_to_segment_dist, intersect_2d::segment_segment_intersect_2d};
use super::{Point2, TOLERANCE};

/// Classification of a segment clipped against the closed area bounded by a ring.
#[derive(Debug, Clone, PartialEq)]
pub enum RingClip {
    /// Segment and area are disjoint.
    Empty,
    /// Segment touches the area at a single point.
    Point(Point2),
    /// One contiguous sub-segment lies inside the area, endpoints ordered
    /// along the segment direction.
    Line(Point2, Point2),
    /// Segment enters and leaves the area more than once.
    Multi,
}

/// Even-odd point-in-polygon test against a closed ring (first == last vertex).
#[must_use]
pub fn point_in_ring(p: &Point2, ring: &[Point2]) -> bool {
    if ring.len() < 4 {
        return false;
    }
    let n = ring.len() - 1;
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&ring[i], &ring[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_int = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_int {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// True if `p` lies within tolerance of any ring edge.
#[must_use]
pub fn point_on_ring(p: &Point2, ring: &[Point2]) -> bool {
    ring.windows(2)
        .any(|e| point_to_segment_dist(p, &e[0], &e[1]) < TOLERANCE)
}

/// Clips the segment `a`→`b` against the closed area bounded by `ring` and
/// classifies the result.
///
/// The ring is treated as a closed region: a sub-segment running along a ring
/// edge counts as covered. The returned `Line` endpoints are ordered along
/// the segment direction (entry first, exit second).
#[must_use]
pub fn clip_segment_to_ring(ring: &[Point2], a: &Point2, b: &Point2) -> RingClip {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        if point_in_ring(a, ring) || point_on_ring(a, ring) {
            return RingClip::Point(*a);
        }
        return RingClip::Empty;
    }

    // Cut parameters where coverage can switch: segment endpoints, proper
    // edge crossings, and the projections of collinear edge endpoints.
    let mut params = vec![0.0, 1.0];
    for edge in ring.windows(2) {
        if let Some((_, t, _)) = segment_segment_intersect_2d(a, b, &edge[0], &edge[1]) {
            params.push(t);
        } else if point_to_segment_dist(&edge[0], a, b) < TOLERANCE
            && point_to_segment_dist(&edge[1], a, b) < TOLERANCE
        {
            for q in [&edge[0], &edge[1]] {
                let t = (q - a).dot(&d) / len_sq;
                if t >= -TOLERANCE && t <= 1.0 + TOLERANCE {
                    params.push(t.clamp(0.0, 1.0));
                }
            }
        }
    }

    params.sort_unstable_by(f64::total_cmp);
    let mut cuts: Vec<f64> = Vec::with_capacity(params.len());
    for t in params {
        if cuts.last().map_or(true, |last| t - last > TOLERANCE) {
            cuts.push(t);
        }
    }

    // Classify each sub-interval by its midpoint and merge adjacent covered
    // ones into maximal spans.
    let mut spans: Vec<(f64, f64)> = Vec::new();
    for w in cuts.windows(2) {
        let (t0, t1) = (w[0], w[1]);
        let mid = a + d * (0.5 * (t0 + t1));
        if point_in_ring(&mid, ring) || point_on_ring(&mid, ring) {
            match spans.last_mut() {
                Some(last) if (last.1 - t0).abs() <= TOLERANCE => last.1 = t1,
                _ => spans.push((t0, t1)),
            }
        }
    }

    if spans.is_empty() {
        // No covered span; the segment may still graze the ring at cut points.
        let touches: Vec<f64> = cuts
            .iter()
            .copied()
            .filter(|&t| point_on_ring(&(a + d * t), ring))
            .collect();
        return match touches.len() {
            0 => RingClip::Empty,
            1 => RingClip::Point(a + d * touches[0]),
            _ => RingClip::Multi,
        };
    }
    if spans.len() > 1 {
        return RingClip::Multi;
    }

    let (t0, t1) = spans[0];
    let (p0, p1) = (a + d * t0, a + d * t1);
    if (p1 - p0).norm() < TOLERANCE {
        RingClip::Point(p0)
    } else {
        RingClip::Line(p0, p1)
    }
}
