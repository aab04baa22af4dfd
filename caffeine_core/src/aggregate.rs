//! Intake aggregation: total consumed versus currently active.
//!
//! The two figures answer different questions and must not be conflated:
//! - `total_mg` is "what you drank today", independent of time
//! - `active_mg` is the linear superposition of each event's independently
//!   decayed remainder (standard first-order pharmacokinetics; doses from
//!   different sources and times do not interact)

use crate::decay::decay;
use crate::error::Result;
use crate::types::{Catalog, IntakeEvent, IntakeSummary};
use chrono::{DateTime, FixedOffset};

/// Fractional hours between an event and the reference time.
///
/// Events timestamped after `now` yield a negative value here; `decay`
/// clamps it to zero, so user clock imprecision degrades gracefully
/// instead of failing the whole calculation.
fn elapsed_hours(now: DateTime<FixedOffset>, consumed_at: DateTime<FixedOffset>) -> f64 {
    (now - consumed_at).num_milliseconds() as f64 / 3_600_000.0
}

/// Aggregate a list of intake events into consumed and active totals.
///
/// An empty list is a valid degenerate input and produces zeros. The only
/// failure mode is dose resolution (unknown source id, negative amount),
/// which is caller error surfaced before any arithmetic.
pub fn aggregate(
    events: &[IntakeEvent],
    catalog: &Catalog,
    now: DateTime<FixedOffset>,
    half_life_hours: f64,
) -> Result<IntakeSummary> {
    let mut summary = IntakeSummary::default();

    for event in events {
        let nominal_mg = catalog.resolve_dose(&event.dose)?;
        let elapsed = elapsed_hours(now, event.consumed_at);

        summary.total_mg += nominal_mg;
        summary.active_mg += decay(nominal_mg, elapsed, half_life_hours);

        tracing::debug!(
            "Intake event: {:.1} mg nominal, {:.2} h elapsed, {:.1} mg active so far",
            nominal_mg,
            elapsed,
            summary.active_mg
        );
    }

    Ok(summary)
}
