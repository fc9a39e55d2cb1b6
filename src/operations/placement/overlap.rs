use crate::geometry::Segment;
use crate::math::polygon_2d::{clip_segment_to_ring, RingClip};

use super::coverage::Coverage;

/// Probes a segment against every sector placed so far and reports how far
/// from the segment start existing coverage reaches.
///
/// Every sector is probed in emission order and each hit overwrites the
/// previous one, so the last intersecting sector decides the result. A
/// sector crossing the segment more than once leaves the result untouched.
pub(super) fn covered_from_start(segment: &Segment, coverage: &Coverage) -> Option<f64> {
    let mut covered = None;
    for sector in coverage.sectors() {
        match clip_segment_to_ring(sector.ring(), segment.start(), segment.end()) {
            RingClip::Point(touch) => {
                covered = Some((touch - segment.start()).norm());
            }
            RingClip::Line(_, exit) => {
                covered = Some((exit - segment.start()).norm());
            }
            RingClip::Empty | RingClip::Multi => {}
        }
    }
    covered
}
