//! Safety tier classification.
//!
//! The input percentage is **total consumed today** over the personalized
//! daily limit. Active-in-body milligrams deliberately play no part here:
//! the daily-limit guideline concerns cumulative intake, not instantaneous
//! blood level.

use crate::types::SafetyTier;

/// Classify a percentage of the daily limit into a safety tier.
///
/// Intervals are half-open with inclusive lower bounds:
/// `< 50` safe, `[50, 80)` moderate, `[80, 100)` high,
/// `[100, 150)` excessive, `>= 150` dangerous.
pub fn classify(percent_of_limit: f64) -> SafetyTier {
    if percent_of_limit < 50.0 {
        SafetyTier::Safe
    } else if percent_of_limit < 80.0 {
        SafetyTier::Moderate
    } else if percent_of_limit < 100.0 {
        SafetyTier::High
    } else if percent_of_limit < 150.0 {
        SafetyTier::Excessive
    } else {
        SafetyTier::Dangerous
    }
}
