//! First-order exponential decay primitive.
//!
//! Caffeine elimination follows first-order kinetics: a fixed fraction of
//! the active amount is cleared per unit time, so the remainder after `t`
//! hours is `initial * 0.5^(t / half_life)`.

/// Half-life in hours for the general adult population.
///
/// Pregnancy can extend this to 10-18 h; callers layer that on by passing a
/// different `half_life_hours`, the primitive itself stays fixed-parameter.
pub const DEFAULT_HALF_LIFE_HOURS: f64 = 5.0;

/// Remaining active milligrams of an `initial_mg` dose after `elapsed_hours`.
///
/// Negative elapsed time (an event timestamped after "now") is clamped to
/// zero: a dose cannot have decayed before it was consumed. Deterministic,
/// no side effects; identical inputs give bit-identical outputs.
pub fn decay(initial_mg: f64, elapsed_hours: f64, half_life_hours: f64) -> f64 {
    let elapsed = elapsed_hours.max(0.0);
    initial_mg * 0.5_f64.powf(elapsed / half_life_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_decay_at_zero_elapsed() {
        assert_relative_eq!(decay(200.0, 0.0, 5.0), 200.0);
    }

    #[test]
    fn test_exact_half_at_one_half_life() {
        assert_relative_eq!(decay(100.0, 5.0, 5.0), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_at_two_half_lives() {
        assert_relative_eq!(decay(100.0, 10.0, 5.0), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_elapsed_clamped() {
        // Future-dated events decay as if consumed right now
        assert_relative_eq!(decay(80.0, -3.0, 5.0), 80.0);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let mut prev = decay(150.0, 0.0, 5.0);
        for i in 1..=48 {
            let cur = decay(150.0, i as f64 * 0.5, 5.0);
            assert!(cur <= prev, "decay increased between steps: {} > {}", cur, prev);
            prev = cur;
        }
    }

    #[test]
    fn test_zero_dose_stays_zero() {
        assert_relative_eq!(decay(0.0, 7.5, 5.0), 0.0);
    }

    #[test]
    fn test_bit_reproducible() {
        let a = decay(123.45, 6.78, 5.0);
        let b = decay(123.45, 6.78, 5.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
