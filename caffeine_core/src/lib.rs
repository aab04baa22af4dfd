#![forbid(unsafe_code)]

//! Core domain model and calculation engine for the caffeine tracker.
//!
//! This crate provides:
//! - Domain types (sources, intake events, safety tiers, results)
//! - Source catalog
//! - First-order decay, aggregation, and clearance math
//! - Safety classification and advisory warning rules
//! - The calculation orchestrator
//!
//! Every computation is a synchronous pure function: the caller captures
//! `now` once and passes it in, so identical inputs always produce
//! identical results. There is no shared mutable state; the catalog is
//! read-only and may be aliased freely across threads.

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod decay;
pub mod limits;
pub mod aggregate;
pub mod classify;
pub mod timeline;
pub mod clearance;
pub mod warnings;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::{Config, EngineParams};
pub use decay::{decay, DEFAULT_HALF_LIFE_HOURS};
pub use limits::resolve_daily_limit;
pub use aggregate::aggregate;
pub use classify::classify;
pub use timeline::project_timeline;
pub use clearance::hours_until_cleared;
pub use warnings::generate_warnings;
pub use engine::calculate;
