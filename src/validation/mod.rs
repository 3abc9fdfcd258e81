//! Validation boundary between raw command text and typed commands.
//!
//! Input is a keyword optionally followed by one value, separated by
//! whitespace: `"Move 100"`, `"SetColor Red"`, `"PenUp"`. Keywords and
//! color names are case-sensitive. Validation is pure and independent of
//! any turtle state; anything that gets past it is a valid `Command`.

pub mod error;

pub use error::ValidationError;

use crate::core::{Angle, Command, Distance, PenColor};

/// Parse a distance. Non-numeric and non-finite values are rejected.
pub fn validate_distance(value: &str) -> Result<Distance, ValidationError> {
    parse_finite(value).ok_or_else(|| ValidationError::InvalidDistance(value.to_string()))
}

/// Parse an angle in degrees. Non-numeric and non-finite values are rejected.
pub fn validate_angle(value: &str) -> Result<Angle, ValidationError> {
    parse_finite(value).ok_or_else(|| ValidationError::InvalidAngle(value.to_string()))
}

/// Parse one of the exact color names `Black`, `Blue` or `Red`.
pub fn validate_color(value: &str) -> Result<PenColor, ValidationError> {
    match value {
        "Black" => Ok(PenColor::Black),
        "Blue" => Ok(PenColor::Blue),
        "Red" => Ok(PenColor::Red),
        other => Err(ValidationError::InvalidColor(other.to_string())),
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Convert a raw command string into a typed `Command`.
///
/// # Example
///
/// ```rust
/// use trundle::core::{Command, PenColor};
/// use trundle::validation::{validate, ValidationError};
///
/// assert_eq!(validate("Move 100"), Ok(Command::Move(100.0)));
/// assert_eq!(validate("SetColor Blue"), Ok(Command::SetColor(PenColor::Blue)));
/// assert_eq!(
///     validate("Move abc"),
///     Err(ValidationError::InvalidDistance("abc".to_string()))
/// );
/// assert_eq!(
///     validate("Dance"),
///     Err(ValidationError::InvalidCommand("Dance".to_string()))
/// );
/// ```
pub fn validate(input: &str) -> Result<Command, ValidationError> {
    let invalid = || ValidationError::InvalidCommand(input.to_string());

    let mut tokens = input.split_whitespace();
    let keyword = tokens.next().ok_or_else(invalid)?;
    let value = tokens.next();
    if tokens.next().is_some() {
        return Err(invalid());
    }

    match (keyword, value) {
        ("Move", value) => validate_distance(value.unwrap_or_default()).map(Command::Move),
        ("Turn", value) => validate_angle(value.unwrap_or_default()).map(Command::Turn),
        ("SetColor", value) => validate_color(value.unwrap_or_default()).map(Command::SetColor),
        ("PenUp", None) => Ok(Command::PenUp),
        ("PenDown", None) => Ok(Command::PenDown),
        _ => Err(invalid()),
    }
}
