//! Rule-based advisory warnings.
//!
//! Six independent checks evaluated in a fixed order; any subset may fire
//! and each rule fires at most once. The generator is a pure projection
//! from the calculation's inputs and intermediate figures to a list of
//! stable warning identifiers - display text belongs to the caller.
//!
//! Note the deliberate mix of references: the tier rule keys off the
//! personalized daily limit, while the sleep and heart rules test *active*
//! milligrams against absolute thresholds, since acute blood-level effects
//! are dose-absolute rather than limit-relative.

use crate::types::{CalculationInput, IntakeSummary, SafetyTier, WarningKind};
use chrono::Timelike;

/// Pregnancy guideline ceiling triggering the overage warning (mg total)
const PREGNANCY_WARN_TOTAL_MG: f64 = 200.0;

/// Limit share above which minors get a dedicated warning (percent)
const YOUTH_WARN_PERCENT: f64 = 80.0;

/// Local hour from which remaining active caffeine threatens sleep
const SLEEP_WARN_HOUR: u32 = 14;

/// Active load above which sleep disruption is flagged (mg)
const SLEEP_WARN_ACTIVE_MG: f64 = 50.0;

/// Active load above which palpitation caution is raised (mg)
const HEART_WARN_ACTIVE_MG: f64 = 400.0;

/// Daily total above which the diuretic/hydration reminder fires (mg)
const HYDRATION_WARN_TOTAL_MG: f64 = 300.0;

/// Evaluate all advisory rules against one calculation.
///
/// The local hour is read from `input.now`'s own offset; no system clock
/// or timezone lookup is involved.
pub fn generate_warnings(
    input: &CalculationInput,
    summary: &IntakeSummary,
    percent_of_limit: f64,
    tier: SafetyTier,
) -> Vec<WarningKind> {
    let mut warnings = Vec::new();

    if input.pregnant && summary.total_mg > PREGNANCY_WARN_TOTAL_MG {
        warnings.push(WarningKind::PregnancyOverage);
    }

    if input.age < 18 && percent_of_limit > YOUTH_WARN_PERCENT {
        warnings.push(WarningKind::YouthLimit);
    }

    if tier >= SafetyTier::Excessive {
        warnings.push(WarningKind::AboveDailyLimit);
    }

    if input.now.hour() >= SLEEP_WARN_HOUR && summary.active_mg > SLEEP_WARN_ACTIVE_MG {
        warnings.push(WarningKind::SleepDisruption);
    }

    if summary.active_mg > HEART_WARN_ACTIVE_MG {
        warnings.push(WarningKind::HeartStrain);
    }

    if summary.total_mg > HYDRATION_WARN_TOTAL_MG {
        warnings.push(WarningKind::Dehydration);
    }

    if !warnings.is_empty() {
        tracing::debug!("Advisory rules fired: {:?}", warnings);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Locale, UnitSystem};
    use chrono::DateTime;

    fn input_at(hour: u32, age: u32, pregnant: bool) -> CalculationInput {
        let now: DateTime<chrono::FixedOffset> =
            format!("2026-08-25T{:02}:00:00+00:00", hour).parse().unwrap();
        CalculationInput {
            age,
            weight: 70.0,
            unit: UnitSystem::Metric,
            pregnant,
            locale: Locale::En,
            events: vec![],
            now,
            bedtime: None,
        }
    }

    fn summary(total_mg: f64, active_mg: f64) -> IntakeSummary {
        IntakeSummary {
            total_mg,
            active_mg,
        }
    }

    #[test]
    fn test_quiet_for_modest_intake() {
        let warnings = generate_warnings(
            &input_at(9, 30, false),
            &summary(100.0, 80.0),
            25.0,
            SafetyTier::Safe,
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_pregnancy_overage() {
        let warnings = generate_warnings(
            &input_at(9, 30, true),
            &summary(300.0, 250.0),
            150.0,
            SafetyTier::Dangerous,
        );
        assert!(warnings.contains(&WarningKind::PregnancyOverage));
    }

    #[test]
    fn test_pregnant_under_ceiling_not_flagged() {
        let warnings = generate_warnings(
            &input_at(9, 30, true),
            &summary(180.0, 150.0),
            90.0,
            SafetyTier::High,
        );
        assert!(!warnings.contains(&WarningKind::PregnancyOverage));
    }

    #[test]
    fn test_youth_limit() {
        let warnings = generate_warnings(
            &input_at(9, 16, false),
            &summary(90.0, 80.0),
            90.0,
            SafetyTier::High,
        );
        assert!(warnings.contains(&WarningKind::YouthLimit));

        // Same percentage at 18 does not fire the youth rule
        let warnings = generate_warnings(
            &input_at(9, 18, false),
            &summary(360.0, 300.0),
            90.0,
            SafetyTier::High,
        );
        assert!(!warnings.contains(&WarningKind::YouthLimit));
    }

    #[test]
    fn test_tier_overage_covers_excessive_and_dangerous() {
        for tier in [SafetyTier::Excessive, SafetyTier::Dangerous] {
            let warnings = generate_warnings(
                &input_at(9, 30, false),
                &summary(450.0, 100.0),
                120.0,
                tier,
            );
            assert!(warnings.contains(&WarningKind::AboveDailyLimit));
        }

        let warnings = generate_warnings(
            &input_at(9, 30, false),
            &summary(350.0, 100.0),
            90.0,
            SafetyTier::High,
        );
        assert!(!warnings.contains(&WarningKind::AboveDailyLimit));
    }

    #[test]
    fn test_sleep_disruption_needs_afternoon_and_active_load() {
        // 14:00 local with >50 mg active fires
        let warnings = generate_warnings(
            &input_at(14, 30, false),
            &summary(120.0, 60.0),
            30.0,
            SafetyTier::Safe,
        );
        assert!(warnings.contains(&WarningKind::SleepDisruption));

        // Morning: same load, no warning
        let warnings = generate_warnings(
            &input_at(9, 30, false),
            &summary(120.0, 60.0),
            30.0,
            SafetyTier::Safe,
        );
        assert!(!warnings.contains(&WarningKind::SleepDisruption));

        // Afternoon but nearly cleared: no warning
        let warnings = generate_warnings(
            &input_at(16, 30, false),
            &summary(120.0, 40.0),
            30.0,
            SafetyTier::Safe,
        );
        assert!(!warnings.contains(&WarningKind::SleepDisruption));
    }

    #[test]
    fn test_heart_strain_is_absolute_not_limit_relative() {
        let warnings = generate_warnings(
            &input_at(9, 30, false),
            &summary(500.0, 420.0),
            50.0,
            SafetyTier::Moderate,
        );
        assert!(warnings.contains(&WarningKind::HeartStrain));
    }

    #[test]
    fn test_hydration_reminder() {
        let warnings = generate_warnings(
            &input_at(9, 30, false),
            &summary(320.0, 100.0),
            80.0,
            SafetyTier::High,
        );
        assert!(warnings.contains(&WarningKind::Dehydration));
    }

    #[test]
    fn test_order_is_stable_and_duplicate_free() {
        // Fire everything at once
        let warnings = generate_warnings(
            &input_at(15, 16, true),
            &summary(600.0, 450.0),
            200.0,
            SafetyTier::Dangerous,
        );

        assert_eq!(
            warnings,
            vec![
                WarningKind::PregnancyOverage,
                WarningKind::YouthLimit,
                WarningKind::AboveDailyLimit,
                WarningKind::SleepDisruption,
                WarningKind::HeartStrain,
                WarningKind::Dehydration,
            ]
        );
    }
}
