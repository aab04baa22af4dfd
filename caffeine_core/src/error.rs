//! Error types for the caffeine_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for caffeine_core operations
///
/// Validation variants carry the offending value so a UI can render a
/// field-level message rather than a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Age must be at least 1 year
    #[error("invalid age: {0} (must be greater than 0)")]
    InvalidAge(u32),

    /// Body weight must be positive and finite
    #[error("invalid body weight: {0} (must be greater than 0)")]
    InvalidWeight(f64),

    /// Custom doses and serving counts may not be negative
    #[error("invalid dose: {0} mg (must not be negative)")]
    NegativeDose(f64),

    /// Dose referenced a source id missing from the catalog
    #[error("unknown caffeine source: '{0}'")]
    UnknownSource(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),
}
