//! Core domain types for the caffeine intake engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Caffeine sources and their properties
//! - Intake events (catalog-referenced or custom doses)
//! - Calculation input and the immutable result record
//! - Safety tiers and warning identifiers
//!
//! All human-readable text lives outside this crate: types here expose only
//! stable identifiers (`as_key`) that presentation layers resolve against
//! their own locale tables.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Source Types
// ============================================================================

/// Unit system for body weight input
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// Category of caffeine source
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Coffee,
    Tea,
    EnergyDrink,
    Soda,
    Chocolate,
    Supplement,
}

/// A caffeine source definition (e.g., "Espresso")
///
/// `name_key` is a locale-table key, never display text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaffeineSource {
    pub id: String,
    pub name_key: String,
    pub mg_per_serving: f64,
    pub category: SourceCategory,
}

/// The complete catalog of caffeine sources
#[derive(Clone, Debug)]
pub struct Catalog {
    pub sources: HashMap<String, CaffeineSource>,
}

// ============================================================================
// Intake Types
// ============================================================================

/// How a single dose is specified: a catalog reference with a serving
/// multiplier, or an explicit milligram amount.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DoseSpec {
    Source { source_id: String, servings: f64 },
    Custom { milligrams: f64 },
}

/// A single timestamped caffeine intake
///
/// Immutable once passed to the engine. Timestamps carry a fixed UTC offset
/// so the engine can reason about the user's local hour without consulting
/// an ambient timezone.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IntakeEvent {
    pub dose: DoseSpec,
    pub consumed_at: DateTime<FixedOffset>,
}

/// Locale requested by the caller; carried through for presentation layers
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Input record for one calculation run
///
/// `now` is captured once by the caller and threaded through every
/// sub-computation; the engine never reads a system clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculationInput {
    pub age: u32,
    pub weight: f64,
    pub unit: UnitSystem,
    pub pregnant: bool,
    #[serde(default)]
    pub locale: Locale,
    pub events: Vec<IntakeEvent>,
    pub now: DateTime<FixedOffset>,
    /// Target bedtime for the last-safe-intake recommendation. When absent,
    /// the orchestrator derives the next configured bedtime hour after `now`.
    pub bedtime: Option<DateTime<FixedOffset>>,
}

// ============================================================================
// Result Types
// ============================================================================

/// Totals produced by the intake aggregator
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct IntakeSummary {
    /// Everything consumed today, ignoring decay
    pub total_mg: f64,
    /// Sum of each event's independently decayed remainder
    pub active_mg: f64,
}

/// Ordered safety classification of total intake against the daily limit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SafetyTier {
    Safe,
    Moderate,
    High,
    Excessive,
    Dangerous,
}

impl SafetyTier {
    /// Stable identifier for locale-table lookup
    pub fn as_key(&self) -> &'static str {
        match self {
            SafetyTier::Safe => "tier.safe",
            SafetyTier::Moderate => "tier.moderate",
            SafetyTier::High => "tier.high",
            SafetyTier::Excessive => "tier.excessive",
            SafetyTier::Dangerous => "tier.dangerous",
        }
    }
}

/// Identifier for an advisory rule that fired
///
/// Declaration order is the stable emission order of the warning generator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    PregnancyOverage,
    YouthLimit,
    AboveDailyLimit,
    SleepDisruption,
    HeartStrain,
    Dehydration,
}

impl WarningKind {
    /// Stable identifier for locale-table lookup
    pub fn as_key(&self) -> &'static str {
        match self {
            WarningKind::PregnancyOverage => "warning.pregnancy_overage",
            WarningKind::YouthLimit => "warning.youth_limit",
            WarningKind::AboveDailyLimit => "warning.above_daily_limit",
            WarningKind::SleepDisruption => "warning.sleep_disruption",
            WarningKind::HeartStrain => "warning.heart_strain",
            WarningKind::Dehydration => "warning.dehydration",
        }
    }
}

/// One sample of the projected decay curve
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimelinePoint {
    pub at: DateTime<FixedOffset>,
    pub active_mg: f64,
    /// Share of the current peak, 0 when the peak itself is 0
    pub percent_of_peak: f64,
}

/// Immutable result record assembled once per calculation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_mg: f64,
    pub active_mg: f64,
    pub daily_limit_mg: f64,
    /// Total consumed today as a percentage of the daily limit. The tier is
    /// derived from this, not from `active_mg`.
    pub percent_of_limit: f64,
    pub tier: SafetyTier,
    pub half_life_hours: f64,
    pub hours_until_cleared: f64,
    pub clear_time: DateTime<FixedOffset>,
    pub last_safe_intake: DateTime<FixedOffset>,
    pub warnings: Vec<WarningKind>,
    /// Detailed chart series (default 1 h steps, 25 points)
    pub timeline: Vec<TimelinePoint>,
    /// Coarser widget series (default 2 h steps out to 12 h)
    pub summary_timeline: Vec<TimelinePoint>,
}
