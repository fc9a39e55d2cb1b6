use crate::geometry::{Sector, Segment};
use crate::sensor::SensorSpec;

use super::coverage::Coverage;
use super::{PlacementPolicy, WalkState};

/// Emits sensors along one segment, spending the carried residual first.
///
/// `index` is the segment's position in the walk; the small-remainder break
/// applies from the third segment on. The residual left in `state` follows
/// the split-on-turns carry rule, otherwise it resets to zero.
pub(super) fn place_along(
    segment: &Segment,
    index: usize,
    spec: &SensorSpec,
    policy: PlacementPolicy,
    state: &mut WalkState,
    coverage: &mut Coverage,
) {
    let direction = segment.direction();
    let range = spec.range();
    let length = segment.length();

    let num = ((length - state.residual) / range).ceil();
    if num < 0.0 {
        // Coverage already reaches past this segment's end: consume the
        // segment from the carry and move on.
        state.residual = if policy.split_on_turns {
            state.residual - length
        } else {
            0.0
        };
        return;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = num as u32;
    for j in 0..count {
        let position =
            segment.start() + direction * state.residual + direction * (range * f64::from(j));
        let remainder = (position - segment.end()).norm();
        if index > 1
            && policy.skip_small
            && remainder < range * 0.25
            && state.accumulated < range * 0.5
        {
            break;
        }
        coverage.append(Sector::build(position, direction, spec));
        state.accumulated = 0.0;
        state.last_placed = position;
    }

    state.residual = if policy.split_on_turns {
        range - ((length - state.residual) - num * range)
    } else {
        0.0
    };
}
