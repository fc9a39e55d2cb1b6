mod coverage;
mod overlap;
mod placer;

pub use coverage::Coverage;

use crate::error::{PlacementError, Result};
use crate::geometry::Boundary;
use crate::math::Point2;
use crate::sensor::SensorSpec;

/// Walk toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementPolicy {
    /// Skip boundary stretches too short to justify another sensor.
    pub skip_small: bool,
    /// Carry leftover spacing across vertices instead of restarting it at
    /// every turn.
    pub split_on_turns: bool,
}

/// State threaded through the walk, one instance per run.
#[derive(Debug)]
struct WalkState {
    /// Length from the current segment's start already covered, spent
    /// before the first sensor goes down.
    residual: f64,
    /// Boundary length walked since the last sensor was placed.
    accumulated: f64,
    last_placed: Point2,
}

/// Places field-of-view sensors along a boundary, segment by segment.
///
/// Each segment is probed against the coverage emitted so far, then filled
/// with sensors spaced one range apart. Residual spacing and the distance
/// walked since the last sensor carry across segments, so the emitted
/// sectors depend on walk order.
#[derive(Debug)]
pub struct PlaceSensors {
    boundary: Boundary,
    spec: SensorSpec,
    policy: PlacementPolicy,
}

impl PlaceSensors {
    /// Creates a new placement operation.
    #[must_use]
    pub fn new(boundary: Boundary, spec: SensorSpec, policy: PlacementPolicy) -> Self {
        Self {
            boundary,
            spec,
            policy,
        }
    }

    /// Executes the walk, returning the emitted coverage.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::InvalidBoundary` if the boundary has fewer
    /// than 2 points, or `PlacementError::DegenerateSegment` when the walk
    /// reaches a repeated consecutive point.
    pub fn execute(&self) -> Result<Coverage> {
        let points = self.boundary.point_count();
        if points < 2 {
            return Err(PlacementError::InvalidBoundary { points }.into());
        }

        let range = self.spec.range();
        let mut state = WalkState {
            residual: 0.0,
            accumulated: 0.0,
            last_placed: Point2::origin(),
        };
        let mut coverage = Coverage::new();

        for index in 0..self.boundary.segment_count() {
            let segment = self.boundary.segment(index)?;
            state.accumulated += segment.length();
            let to_last = (segment.end() - state.last_placed).norm();

            // Short stretches right after a sensor are left to that
            // sensor's aim; the first segment always places.
            if index > 0
                && self.policy.skip_small
                && (state.accumulated < range * 0.5 || to_last < range * 0.25)
            {
                continue;
            }

            if index > 0 {
                if let Some(covered) = overlap::covered_from_start(&segment, &coverage) {
                    state.residual = covered;
                }
            }

            placer::place_along(
                &segment,
                index,
                &self.spec,
                self.policy,
                &mut state,
                &mut coverage,
            );
        }

        tracing::debug!(
            "placed {} sectors across {} segments",
            coverage.len(),
            self.boundary.segment_count()
        );
        Ok(coverage)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PerimetraError;

    const TOL: f64 = 1e-9;

    fn run(points: &[(f64, f64)], policy: PlacementPolicy) -> Coverage {
        let boundary = Boundary::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect());
        PlaceSensors::new(boundary, SensorSpec::default(), policy)
            .execute()
            .unwrap()
    }

    fn apexes(coverage: &Coverage) -> Vec<Point2> {
        coverage.sectors().iter().map(|s| *s.apex()).collect()
    }

    fn assert_apexes(coverage: &Coverage, expected: &[(f64, f64)]) {
        let got = apexes(coverage);
        assert_eq!(
            got.len(),
            expected.len(),
            "sector count mismatch: got {got:?}"
        );
        for (i, (p, &(x, y))) in got.iter().zip(expected).enumerate() {
            assert!(
                (p.x - x).abs() < TOL && (p.y - y).abs() < TOL,
                "apex {i}: got ({}, {}), expected ({x}, {y})",
                p.x,
                p.y
            );
        }
    }

    // ── input validation ──

    #[test]
    fn empty_boundary_rejected() {
        let op = PlaceSensors::new(
            Boundary::new(vec![]),
            SensorSpec::default(),
            PlacementPolicy::default(),
        );
        match op.execute().unwrap_err() {
            PerimetraError::Placement(PlacementError::InvalidBoundary { points }) => {
                assert_eq!(points, 0);
            }
            other => panic!("expected InvalidBoundary, got {other:?}"),
        }
    }

    #[test]
    fn single_point_rejected() {
        let op = PlaceSensors::new(
            Boundary::new(vec![Point2::new(3.0, 3.0)]),
            SensorSpec::default(),
            PlacementPolicy::default(),
        );
        match op.execute().unwrap_err() {
            PerimetraError::Placement(PlacementError::InvalidBoundary { points }) => {
                assert_eq!(points, 1);
            }
            other => panic!("expected InvalidBoundary, got {other:?}"),
        }
    }

    #[test]
    fn repeated_point_fails_mid_walk() {
        let boundary = Boundary::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(50.0, 0.0),
            Point2::new(50.0, 0.0),
            Point2::new(50.0, 40.0),
        ]);
        let op = PlaceSensors::new(boundary, SensorSpec::default(), PlacementPolicy::default());
        match op.execute().unwrap_err() {
            PerimetraError::Placement(PlacementError::DegenerateSegment { index, x, y }) => {
                assert_eq!(index, 1);
                assert!((x - 50.0).abs() < TOL);
                assert!(y.abs() < TOL);
            }
            other => panic!("expected DegenerateSegment, got {other:?}"),
        }
    }

    // ── spacing ──

    #[test]
    fn single_segment_places_at_start() {
        let coverage = run(&[(0.0, 0.0), (10.0, 0.0)], PlacementPolicy::default());
        assert_apexes(&coverage, &[(0.0, 0.0)]);
        let dir = coverage.sectors()[0].direction();
        assert!((dir.x - 1.0).abs() < TOL && dir.y.abs() < TOL);
    }

    #[test]
    fn uniform_spacing_along_straight_run() {
        let coverage = run(&[(0.0, 0.0), (100.0, 0.0)], PlacementPolicy::default());
        assert_apexes(
            &coverage,
            &[(0.0, 0.0), (20.0, 0.0), (40.0, 0.0), (60.0, 0.0), (80.0, 0.0)],
        );
        for sector in coverage.sectors() {
            assert!((sector.direction().x - 1.0).abs() < TOL);
        }
    }

    // ── overlap probe ──

    #[test]
    fn coverage_overlap_defers_next_sensor() {
        // The second segment starts inside the first sector; its first
        // sensor moves to where that wedge exits (15·tan 10°).
        let coverage = run(&[(0.0, 0.0), (15.0, 0.0), (15.0, 21.0)], PlacementPolicy::default());
        assert_apexes(&coverage, &[(0.0, 0.0), (15.0, 2.644_904_710_626_974_5)]);
    }

    #[test]
    fn probe_overwrites_carried_residual() {
        let policy = PlacementPolicy {
            split_on_turns: true,
            ..PlacementPolicy::default()
        };
        let coverage = run(&[(0.0, 0.0), (30.0, 0.0), (30.0, 40.0)], policy);
        assert_apexes(
            &coverage,
            &[
                (0.0, 0.0),
                (20.0, 0.0),
                (30.0, 1.763_269_807_084_649_5),
                (30.0, 21.763_269_807_084_65),
            ],
        );
    }

    // ── skip_small ──

    #[test]
    fn skip_small_suppresses_tail_sensor() {
        let points = [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (84.0, 40.0)];
        let skipping = run(
            &points,
            PlacementPolicy {
                skip_small: true,
                ..PlacementPolicy::default()
            },
        );
        assert_apexes(
            &skipping,
            &[
                (0.0, 0.0),
                (20.0, 0.0),
                (40.0, 0.0),
                (40.0, 20.0),
                (40.0, 40.0),
                (60.0, 40.0),
            ],
        );

        let full = run(&points, PlacementPolicy::default());
        assert_eq!(full.len(), 7);
        let last = full.sectors()[6].apex();
        assert!((last.x - 80.0).abs() < TOL && (last.y - 40.0).abs() < TOL);
    }

    #[test]
    fn skip_small_skips_short_segment_entirely() {
        let points = [(0.0, 0.0), (20.0, 0.0), (23.0, 0.0), (23.0, -30.0)];
        let skipping = run(
            &points,
            PlacementPolicy {
                skip_small: true,
                ..PlacementPolicy::default()
            },
        );
        assert_apexes(&skipping, &[(0.0, 0.0), (23.0, 0.0), (23.0, -20.0)]);

        // Without the skip the short segment places a sensor, and the next
        // segment's probe then finds that wedge across its start.
        let full = run(&points, PlacementPolicy::default());
        assert_apexes(
            &full,
            &[
                (0.0, 0.0),
                (20.0, 0.0),
                (23.0, -0.528_980_942_125_395_3),
                (23.0, -20.528_980_942_125_393),
            ],
        );
    }

    #[test]
    fn accumulated_at_exact_threshold_is_not_skipped() {
        // Walked length equals range/2 exactly; the skip test is strict.
        let coverage = run(
            &[(0.0, 0.0), (20.0, 0.0), (30.0, 0.0), (30.0, -40.0)],
            PlacementPolicy {
                skip_small: true,
                ..PlacementPolicy::default()
            },
        );
        assert_apexes(
            &coverage,
            &[
                (0.0, 0.0),
                (20.0, 0.0),
                (30.0, -1.763_269_807_084_65),
                (30.0, -21.763_269_807_084_65),
            ],
        );
    }

    // ── split_on_turns ──

    #[test]
    fn split_on_turns_carries_spacing_through_corner() {
        let points = [(0.0, 0.0), (40.0, 0.0), (40.0, 50.0)];
        let carrying = run(
            &points,
            PlacementPolicy {
                split_on_turns: true,
                ..PlacementPolicy::default()
            },
        );
        assert_apexes(
            &carrying,
            &[(0.0, 0.0), (20.0, 0.0), (40.0, 20.0), (40.0, 40.0)],
        );

        let restarting = run(&points, PlacementPolicy::default());
        assert_apexes(
            &restarting,
            &[
                (0.0, 0.0),
                (20.0, 0.0),
                (40.0, 0.0),
                (40.0, 20.0),
                (40.0, 40.0),
            ],
        );
    }

    #[test]
    fn carried_residual_consumes_fully_covered_segments() {
        // The 6-unit third segment sits entirely inside the carried
        // spacing; nothing is placed on it and the carry shrinks by its
        // length.
        let coverage = run(
            &[
                (0.0, 0.0),
                (40.0, 0.0),
                (40.0, 12.0),
                (40.0, 18.0),
                (40.0, 58.0),
            ],
            PlacementPolicy {
                split_on_turns: true,
                ..PlacementPolicy::default()
            },
        );
        assert_apexes(&coverage, &[(0.0, 0.0), (20.0, 0.0), (40.0, 40.0)]);
    }

    // ── determinism ──

    #[test]
    fn identical_runs_produce_identical_sectors() {
        let points = [(0.0, 0.0), (37.0, 11.0), (64.0, -5.0), (64.0, 44.0)];
        let policy = PlacementPolicy {
            skip_small: true,
            split_on_turns: true,
        };
        let a = run(&points, policy);
        let b = run(&points, policy);
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.sectors().iter().zip(b.sectors()) {
            assert_eq!(sa.apex(), sb.apex());
            assert_eq!(sa.ring(), sb.ring());
        }
    }

    #[test]
    fn execute_borrows_and_can_rerun() {
        let boundary = Boundary::new(vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]);
        let op = PlaceSensors::new(boundary, SensorSpec::default(), PlacementPolicy::default());
        let first = op.execute().unwrap();
        let second = op.execute().unwrap();
        assert_eq!(first.len(), second.len());
    }
}
