//! Default catalog of caffeine sources.
//!
//! This module provides the built-in sources and their per-serving caffeine
//! content. Values are typical-serving figures in milligrams.

use crate::error::{Error, Result};
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
///
/// The catalog is immutable after construction and may be freely aliased
/// across threads; there is no per-call copy.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of caffeine sources
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn source(id: &str, mg: f64, category: SourceCategory) -> (String, CaffeineSource) {
    (
        id.to_string(),
        CaffeineSource {
            id: id.to_string(),
            name_key: format!("source.{}", id),
            mg_per_serving: mg,
            category,
        },
    )
}

fn build_default_catalog_internal() -> Catalog {
    let sources: HashMap<String, CaffeineSource> = [
        source("espresso", 63.0, SourceCategory::Coffee),
        source("coffee_brewed", 95.0, SourceCategory::Coffee),
        source("coffee_instant", 62.0, SourceCategory::Coffee),
        source("cold_brew", 200.0, SourceCategory::Coffee),
        source("decaf_coffee", 2.0, SourceCategory::Coffee),
        source("black_tea", 47.0, SourceCategory::Tea),
        source("green_tea", 28.0, SourceCategory::Tea),
        source("matcha", 70.0, SourceCategory::Tea),
        source("energy_drink", 80.0, SourceCategory::EnergyDrink),
        source("energy_drink_large", 160.0, SourceCategory::EnergyDrink),
        source("cola", 34.0, SourceCategory::Soda),
        source("dark_chocolate", 23.0, SourceCategory::Chocolate),
        source("caffeine_pill", 200.0, SourceCategory::Supplement),
    ]
    .into_iter()
    .collect();

    Catalog { sources }
}

impl Catalog {
    /// Resolve a dose specification to nominal milligrams.
    ///
    /// Catalog doses multiply the per-serving content by the serving count.
    /// Negative servings or custom amounts are caller errors and rejected
    /// here, before any arithmetic downstream.
    pub fn resolve_dose(&self, dose: &DoseSpec) -> Result<f64> {
        match dose {
            DoseSpec::Source {
                source_id,
                servings,
            } => {
                if *servings < 0.0 || !servings.is_finite() {
                    return Err(Error::NegativeDose(*servings));
                }
                let src = self
                    .sources
                    .get(source_id)
                    .ok_or_else(|| Error::UnknownSource(source_id.clone()))?;
                Ok(src.mg_per_serving * servings)
            }
            DoseSpec::Custom { milligrams } => {
                if *milligrams < 0.0 || !milligrams.is_finite() {
                    return Err(Error::NegativeDose(*milligrams));
                }
                Ok(*milligrams)
            }
        }
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, src) in &self.sources {
            if id.is_empty() || src.id.is_empty() {
                errors.push("Source has empty ID".to_string());
            }
            if id != &src.id {
                errors.push(format!(
                    "Source key '{}' doesn't match source.id '{}'",
                    id, src.id
                ));
            }
            if src.name_key.is_empty() {
                errors.push(format!("Source '{}' has empty name key", id));
            }
            if !(src.mg_per_serving.is_finite() && src.mg_per_serving >= 0.0) {
                errors.push(format!(
                    "Source '{}' has invalid caffeine content {}",
                    id, src.mg_per_serving
                ));
            }
        }

        // Every category a UI groups by should have at least one entry
        let has_coffee = self
            .sources
            .values()
            .any(|s| s.category == SourceCategory::Coffee);
        let has_tea = self
            .sources
            .values()
            .any(|s| s.category == SourceCategory::Tea);
        let has_energy = self
            .sources
            .values()
            .any(|s| s.category == SourceCategory::EnergyDrink);

        if !has_coffee {
            errors.push("Catalog has no coffee sources".to_string());
        }
        if !has_tea {
            errors.push("Catalog has no tea sources".to_string());
        }
        if !has_energy {
            errors.push("Catalog has no energy drink sources".to_string());
        }

        errors
    }
}
