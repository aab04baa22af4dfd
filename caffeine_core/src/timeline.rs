//! Forward projection of the aggregate decay curve.
//!
//! Produces a finite, eagerly materialized, time-ordered series suitable for
//! charting. The same projector serves both the detailed chart (1 h steps,
//! 25 points) and the coarser summary widget (2 h steps out to 12 h).

use crate::decay::decay;
use crate::types::TimelinePoint;
use chrono::{DateTime, Duration, FixedOffset};

/// Default step for the detailed chart series (hours)
pub const DETAIL_STEP_HOURS: f64 = 1.0;

/// Default point count for the detailed chart series (0..24 h inclusive)
pub const DETAIL_STEP_COUNT: usize = 25;

/// Default step for the summary widget series (hours)
pub const SUMMARY_STEP_HOURS: f64 = 2.0;

/// Default point count for the summary widget series (0..12 h inclusive)
pub const SUMMARY_STEP_COUNT: usize = 7;

/// Sample the decay curve at fixed future offsets.
///
/// Point `i` lies at `now + i * step_hours` with the active amount decayed
/// from `active_mg_now`. `percent_of_peak` is defined as 0 when the current
/// peak is 0. `now` is captured once by the caller; re-running with the same
/// arguments yields a deep-equal series.
pub fn project_timeline(
    active_mg_now: f64,
    now: DateTime<FixedOffset>,
    step_hours: f64,
    step_count: usize,
    half_life_hours: f64,
) -> Vec<TimelinePoint> {
    (0..step_count)
        .map(|i| {
            let offset_hours = i as f64 * step_hours;
            let active_mg = decay(active_mg_now, offset_hours, half_life_hours);
            let percent_of_peak = if active_mg_now > 0.0 {
                active_mg / active_mg_now * 100.0
            } else {
                0.0
            };

            TimelinePoint {
                at: now + Duration::milliseconds((offset_hours * 3_600_000.0) as i64),
                active_mg,
                percent_of_peak,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixed_now() -> DateTime<FixedOffset> {
        "2026-08-25T09:00:00+02:00".parse().unwrap()
    }

    #[test]
    fn test_detail_series_shape() {
        let points = project_timeline(200.0, fixed_now(), 1.0, 25, 5.0);

        assert_eq!(points.len(), 25);
        assert_eq!(points[0].at, fixed_now());
        assert_eq!(points[24].at, fixed_now() + Duration::hours(24));
        assert_relative_eq!(points[0].active_mg, 200.0);
        assert_relative_eq!(points[0].percent_of_peak, 100.0);
        // One half-life in: half the peak
        assert_relative_eq!(points[5].active_mg, 100.0, epsilon = 1e-9);
        assert_relative_eq!(points[5].percent_of_peak, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_points_ordered_and_non_increasing() {
        let points = project_timeline(150.0, fixed_now(), 2.0, 7, 5.0);

        for pair in points.windows(2) {
            assert!(pair[0].at < pair[1].at);
            assert!(pair[0].active_mg >= pair[1].active_mg);
        }
    }

    #[test]
    fn test_zero_peak_has_zero_percentages() {
        let points = project_timeline(0.0, fixed_now(), 1.0, 25, 5.0);

        assert!(points
            .iter()
            .all(|p| p.active_mg == 0.0 && p.percent_of_peak == 0.0));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let a = project_timeline(123.4, fixed_now(), 1.0, 25, 5.0);
        let b = project_timeline(123.4, fixed_now(), 1.0, 25, 5.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_arbitrary_step_and_count() {
        let points = project_timeline(100.0, fixed_now(), 0.5, 4, 5.0);

        assert_eq!(points.len(), 4);
        assert_eq!(points[3].at, fixed_now() + Duration::minutes(90));
    }
}
