//! Calculation orchestrator.
//!
//! Single entry point wiring the pipeline in sequence:
//! validate input → resolve daily limit → aggregate intake → classify →
//! estimate clearance → project timelines → generate warnings → assemble
//! the immutable result.
//!
//! All validation happens here at the boundary; past it, every
//! sub-computation is a total function over its domain. One call, one
//! result, no retained state.

use crate::aggregate::aggregate;
use crate::classify::classify;
use crate::clearance::{clear_time, hours_until_cleared, last_safe_intake};
use crate::config::EngineParams;
use crate::error::{Error, Result};
use crate::limits::resolve_daily_limit;
use crate::timeline::project_timeline;
use crate::types::{CalculationInput, CalculationResult, Catalog, DoseSpec};
use crate::warnings::generate_warnings;
use chrono::{DateTime, Duration, FixedOffset};

/// Run one complete calculation.
///
/// Fails fast with a typed error for caller mistakes (zero age,
/// non-positive weight, negative dose, unknown source id). Every other
/// input, including an empty event list, produces a valid result.
pub fn calculate(
    catalog: &Catalog,
    input: &CalculationInput,
    params: &EngineParams,
) -> Result<CalculationResult> {
    validate(input)?;

    let daily_limit_mg = resolve_daily_limit(input.age, input.weight, input.unit, input.pregnant);
    let summary = aggregate(&input.events, catalog, input.now, params.half_life_hours)?;

    // The tier reflects cumulative intake against the personalized limit,
    // not the instantaneous blood level.
    let percent_of_limit = summary.total_mg / daily_limit_mg * 100.0;
    let tier = classify(percent_of_limit);

    let hours = hours_until_cleared(
        summary.active_mg,
        params.half_life_hours,
        params.cleared_fraction,
    );

    let bedtime = input
        .bedtime
        .unwrap_or_else(|| next_bedtime(input.now, params.bedtime_hour));

    let timeline = project_timeline(
        summary.active_mg,
        input.now,
        params.detail_step_hours,
        params.detail_step_count,
        params.half_life_hours,
    );
    let summary_timeline = project_timeline(
        summary.active_mg,
        input.now,
        params.summary_step_hours,
        params.summary_step_count,
        params.half_life_hours,
    );

    let warnings = generate_warnings(input, &summary, percent_of_limit, tier);

    tracing::info!(
        "Calculated intake: {:.0} mg total, {:.0} mg active, {:.0}% of {:.0} mg limit ({:?})",
        summary.total_mg,
        summary.active_mg,
        percent_of_limit,
        daily_limit_mg,
        tier
    );

    Ok(CalculationResult {
        total_mg: summary.total_mg,
        active_mg: summary.active_mg,
        daily_limit_mg,
        percent_of_limit,
        tier,
        half_life_hours: params.half_life_hours,
        hours_until_cleared: hours,
        clear_time: clear_time(input.now, hours),
        last_safe_intake: last_safe_intake(bedtime, params.safety_window_hours),
        warnings,
        timeline,
        summary_timeline,
    })
}

/// Boundary validation; no sub-component past this point can fail on
/// these conditions.
fn validate(input: &CalculationInput) -> Result<()> {
    if input.age == 0 {
        return Err(Error::InvalidAge(input.age));
    }
    if !(input.weight.is_finite() && input.weight > 0.0) {
        return Err(Error::InvalidWeight(input.weight));
    }
    for event in &input.events {
        match &event.dose {
            DoseSpec::Custom { milligrams } if *milligrams < 0.0 => {
                return Err(Error::NegativeDose(*milligrams));
            }
            DoseSpec::Source { servings, .. } if *servings < 0.0 => {
                return Err(Error::NegativeDose(*servings));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Next occurrence of `hour:00` strictly after `now`, in `now`'s offset.
fn next_bedtime(now: DateTime<FixedOffset>, hour: u32) -> DateTime<FixedOffset> {
    let candidate = now
        .date_naive()
        .and_hms_opt(hour.min(23), 0, 0)
        .expect("hour clamped to 0..=23")
        .and_local_timezone(*now.offset())
        .single()
        .expect("fixed offsets are unambiguous");

    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::types::{IntakeEvent, Locale, SafetyTier, UnitSystem, WarningKind};
    use approx::assert_relative_eq;

    fn fixed_now() -> DateTime<FixedOffset> {
        "2026-08-25T10:00:00+00:00".parse().unwrap()
    }

    fn base_input(events: Vec<IntakeEvent>) -> CalculationInput {
        CalculationInput {
            age: 30,
            weight: 70.0,
            unit: UnitSystem::Metric,
            pregnant: false,
            locale: Locale::En,
            events,
            now: fixed_now(),
            bedtime: None,
        }
    }

    fn custom_event(mg: f64, hours_ago: i64) -> IntakeEvent {
        IntakeEvent {
            dose: DoseSpec::Custom { milligrams: mg },
            consumed_at: fixed_now() - Duration::hours(hours_ago),
        }
    }

    #[test]
    fn test_end_to_end_moderate_boundary() {
        // 200 mg exactly one half-life ago for a 70 kg adult
        let catalog = build_default_catalog();
        let input = base_input(vec![custom_event(200.0, 5)]);

        let result = calculate(&catalog, &input, &EngineParams::default()).unwrap();

        assert_relative_eq!(result.total_mg, 200.0);
        assert_relative_eq!(result.active_mg, 100.0, epsilon = 1e-9);
        assert_relative_eq!(result.daily_limit_mg, 400.0);
        assert_relative_eq!(result.percent_of_limit, 50.0, epsilon = 1e-9);
        assert_eq!(result.tier, SafetyTier::Moderate);
        assert_relative_eq!(result.hours_until_cleared, 5.0 * 10.0_f64.log2(), epsilon = 1e-9);
        assert_eq!(result.timeline.len(), 25);
        assert_eq!(result.summary_timeline.len(), 7);
    }

    #[test]
    fn test_end_to_end_pregnant_overage() {
        let catalog = build_default_catalog();
        let mut input = base_input(vec![custom_event(150.0, 0), custom_event(150.0, 0)]);
        input.pregnant = true;

        let result = calculate(&catalog, &input, &EngineParams::default()).unwrap();

        assert_relative_eq!(result.total_mg, 300.0);
        assert_relative_eq!(result.daily_limit_mg, 200.0);
        assert_eq!(result.tier, SafetyTier::Dangerous);
        assert!(result.warnings.contains(&WarningKind::PregnancyOverage));
    }

    #[test]
    fn test_zero_intake_is_valid_all_zero_result() {
        let catalog = build_default_catalog();
        let input = base_input(vec![]);

        let result = calculate(&catalog, &input, &EngineParams::default()).unwrap();

        assert_eq!(result.total_mg, 0.0);
        assert_eq!(result.active_mg, 0.0);
        assert_eq!(result.percent_of_limit, 0.0);
        assert_eq!(result.tier, SafetyTier::Safe);
        assert_eq!(result.hours_until_cleared, 0.0);
        assert_eq!(result.clear_time, fixed_now());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_zero_age_rejected() {
        let catalog = build_default_catalog();
        let mut input = base_input(vec![]);
        input.age = 0;

        let err = calculate(&catalog, &input, &EngineParams::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidAge(0)));
    }

    #[test]
    fn test_nonpositive_weight_rejected() {
        let catalog = build_default_catalog();

        for bad in [0.0, -70.0, f64::NAN] {
            let mut input = base_input(vec![]);
            input.weight = bad;
            let err = calculate(&catalog, &input, &EngineParams::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidWeight(_)));
        }
    }

    #[test]
    fn test_negative_custom_dose_rejected_before_computation() {
        let catalog = build_default_catalog();
        let input = base_input(vec![custom_event(-50.0, 0)]);

        let err = calculate(&catalog, &input, &EngineParams::default()).unwrap_err();
        assert!(matches!(err, Error::NegativeDose(_)));
    }

    #[test]
    fn test_explicit_bedtime_drives_last_safe_intake() {
        let catalog = build_default_catalog();
        let mut input = base_input(vec![]);
        input.bedtime = Some("2026-08-25T22:00:00+00:00".parse().unwrap());

        let result = calculate(&catalog, &input, &EngineParams::default()).unwrap();

        let expected: DateTime<FixedOffset> = "2026-08-25T16:00:00+00:00".parse().unwrap();
        assert_eq!(result.last_safe_intake, expected);
    }

    #[test]
    fn test_default_bedtime_is_next_configured_hour() {
        let catalog = build_default_catalog();
        let input = base_input(vec![]);

        // now is 10:00; default bedtime hour 23 → today 23:00, minus 6 h window
        let result = calculate(&catalog, &input, &EngineParams::default()).unwrap();
        let expected: DateTime<FixedOffset> = "2026-08-25T17:00:00+00:00".parse().unwrap();
        assert_eq!(result.last_safe_intake, expected);
    }

    #[test]
    fn test_next_bedtime_rolls_over_midnight() {
        let late: DateTime<FixedOffset> = "2026-08-25T23:30:00+00:00".parse().unwrap();
        let bedtime = next_bedtime(late, 23);
        let expected: DateTime<FixedOffset> = "2026-08-26T23:00:00+00:00".parse().unwrap();
        assert_eq!(bedtime, expected);
    }

    #[test]
    fn test_identical_inputs_identical_results() {
        let catalog = build_default_catalog();
        let input = base_input(vec![custom_event(120.0, 2), custom_event(63.0, 7)]);

        let a = calculate(&catalog, &input, &EngineParams::default()).unwrap();
        let b = calculate(&catalog, &input, &EngineParams::default()).unwrap();

        assert_eq!(a.timeline, b.timeline);
        assert_eq!(a.warnings, b.warnings);
        assert_eq!(a.active_mg.to_bits(), b.active_mg.to_bits());
    }
}
