//! Clearance estimation: when the active load is effectively gone.
//!
//! "Cleared" means the active amount has fallen to a small fraction of its
//! current value, 10% by default. Solving the decay law
//! `0.5^(h / half_life) = fraction` for `h` gives the closed form
//!
//! ```text
//! h = half_life * ln(fraction) / ln(0.5)
//! ```
//!
//! For the 10% default the multiplier works out to ~3.3219 half-lives
//! (log2 of 10); it is derived, not hardcoded, so changing the fraction
//! changes the answer consistently.

use chrono::{DateTime, Duration, FixedOffset};

/// Fraction of the current active load treated as "effectively gone"
pub const DEFAULT_CLEARED_FRACTION: f64 = 0.10;

/// Hours before bedtime after which intake is not recommended
pub const DEFAULT_SAFETY_WINDOW_HOURS: f64 = 6.0;

/// Hours until the active load decays to `cleared_fraction` of its
/// current value. Zero active load clears in zero hours.
pub fn hours_until_cleared(active_mg_now: f64, half_life_hours: f64, cleared_fraction: f64) -> f64 {
    if active_mg_now <= 0.0 {
        return 0.0;
    }
    half_life_hours * cleared_fraction.ln() / 0.5_f64.ln()
}

/// Wall-clock time at which clearance occurs.
pub fn clear_time(now: DateTime<FixedOffset>, hours: f64) -> DateTime<FixedOffset> {
    now + Duration::milliseconds((hours * 3_600_000.0) as i64)
}

/// Recommended last intake time relative to a target bedtime.
///
/// A fixed-offset recommendation, independent of the decay curve: simply
/// `bedtime - safety_window_hours`.
pub fn last_safe_intake(
    bedtime: DateTime<FixedOffset>,
    safety_window_hours: f64,
) -> DateTime<FixedOffset> {
    bedtime - Duration::milliseconds((safety_window_hours * 3_600_000.0) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decay::decay;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_fraction_multiplier() {
        // log2(10) half-lives to reach 10%
        let h = hours_until_cleared(100.0, 5.0, DEFAULT_CLEARED_FRACTION);
        assert_relative_eq!(h, 5.0 * 10.0_f64.log2(), epsilon = 1e-9);
        assert_relative_eq!(h, 16.6096, epsilon = 1e-3);
    }

    #[test]
    fn test_inverse_of_forward_decay() {
        // Running the forward decay for the solved duration lands on the
        // cleared fraction exactly.
        let active = 240.0;
        let h = hours_until_cleared(active, 5.0, 0.10);
        assert_relative_eq!(decay(active, h, 5.0), 0.10 * active, epsilon = 1e-9);
    }

    #[test]
    fn test_other_fractions_scale_consistently() {
        let h = hours_until_cleared(100.0, 5.0, 0.5);
        assert_relative_eq!(h, 5.0, epsilon = 1e-9);

        let h = hours_until_cleared(100.0, 5.0, 0.25);
        assert_relative_eq!(h, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_active_clears_immediately() {
        assert_relative_eq!(hours_until_cleared(0.0, 5.0, 0.10), 0.0);
    }

    #[test]
    fn test_clear_time_offsets_from_now() {
        let now: DateTime<FixedOffset> = "2026-08-25T10:00:00+00:00".parse().unwrap();
        assert_eq!(clear_time(now, 2.5), now + Duration::minutes(150));
    }

    #[test]
    fn test_last_safe_intake_is_fixed_offset() {
        let bedtime: DateTime<FixedOffset> = "2026-08-25T23:00:00+01:00".parse().unwrap();
        let expected: DateTime<FixedOffset> = "2026-08-25T17:00:00+01:00".parse().unwrap();
        assert_eq!(last_safe_intake(bedtime, 6.0), expected);
    }
}
