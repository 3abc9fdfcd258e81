//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write TOML config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

/// One problem found while validating a configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigViolation {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("movement bounds are empty: min {min} is not below max {max}")]
    EmptyBounds { min: f64, max: f64 },

    #[error("movement scale must be positive, got {0}")]
    NonPositiveScale(f64),

    #[error("start ({x}, {y}) lies outside the bounds [{min}, {max}]")]
    StartOutOfBounds { x: f64, y: f64, min: f64, max: f64 },
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
