//! Personalized daily caffeine limit resolution.
//!
//! Rules, in precedence order:
//! - Pregnancy: fixed 200 mg regardless of age or weight
//! - Under 18: 3 mg per kg of body weight, capped at 100 mg
//! - Adults (18 and over): fixed 400 mg

use crate::types::UnitSystem;

/// Fixed ceiling during pregnancy (mg)
pub const PREGNANCY_LIMIT_MG: f64 = 200.0;

/// Fixed ceiling for non-pregnant adults (mg)
pub const ADULT_LIMIT_MG: f64 = 400.0;

/// Per-kilogram allowance for minors (mg/kg)
pub const MINOR_MG_PER_KG: f64 = 3.0;

/// Absolute cap for minors regardless of weight (mg)
pub const MINOR_CAP_MG: f64 = 100.0;

/// Pounds to kilograms
const LB_TO_KG: f64 = 0.453592;

/// Body weight in kilograms, normalizing imperial input.
pub fn weight_kg(weight: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Metric => weight,
        UnitSystem::Imperial => weight * LB_TO_KG,
    }
}

/// Resolve the personalized safe daily milligram ceiling.
///
/// Age 18 is the adult tier; the minor rule applies strictly below 18.
pub fn resolve_daily_limit(age: u32, weight: f64, unit: UnitSystem, pregnant: bool) -> f64 {
    if pregnant {
        return PREGNANCY_LIMIT_MG;
    }

    if age < 18 {
        let kg = weight_kg(weight, unit);
        return (MINOR_MG_PER_KG * kg).min(MINOR_CAP_MG);
    }

    ADULT_LIMIT_MG
}
