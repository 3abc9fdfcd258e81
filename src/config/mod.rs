//! Turtle configuration loaded from TOML.
//!
//! Every section and field is optional; anything left out takes its
//! default. A complete file looks like:
//!
//! ```toml
//! [turtle]
//! x = 10.0
//! y = 10.0
//! heading = 90.0
//! color = "Red"
//! pen = "Down"
//!
//! [movement]
//! policy = "bounded"
//! min = 0.0
//! max = 100.0
//! scale = 0.5
//!
//! [ink]
//! exhausted = ["Blue"]
//! ```

mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::api::TurtleFunctions;
use crate::core::{
    normalize_heading, InkSupply, MovePolicy, PenColor, PenState, Position, SharedLog,
    TurtleState, DEFAULT_MAX_COORD, DEFAULT_MIN_COORD,
};
use crate::interpreter::Interpreter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    pub turtle: StartConfig,
    pub movement: MovementConfig,
    pub ink: InkConfig,
}

/// Where and how a turtle starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub color: PenColor,
    pub pen: PenState,
}

impl Default for StartConfig {
    fn default() -> Self {
        let initial = TurtleState::initial();
        Self {
            x: initial.position.x,
            y: initial.position.y,
            heading: initial.heading,
            color: initial.color,
            pen: initial.pen,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Unbounded,
    Bounded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub policy: PolicyKind,
    pub min: f64,
    pub max: f64,
    /// Multiplier applied to every move distance.
    pub scale: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Unbounded,
            min: DEFAULT_MIN_COORD,
            max: DEFAULT_MAX_COORD,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkConfig {
    /// Colors that have run out of ink.
    pub exhausted: Vec<PenColor>,
}

type Checked = Validation<(), NonEmptyVec<ConfigViolation>>;

fn finite(field: &'static str, value: f64) -> Checked {
    if value.is_finite() {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::NotFinite { field })
    }
}

impl TurtleConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded turtle config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Checked {
        let start = &self.turtle;
        let movement = &self.movement;

        let mut checks = vec![
            finite("turtle.x", start.x),
            finite("turtle.y", start.y),
            finite("turtle.heading", start.heading),
            finite("movement.scale", movement.scale),
        ];

        if movement.scale.is_finite() && movement.scale <= 0.0 {
            checks.push(Validation::fail(ConfigViolation::NonPositiveScale(
                movement.scale,
            )));
        }

        if movement.policy == PolicyKind::Bounded {
            checks.push(finite("movement.min", movement.min));
            checks.push(finite("movement.max", movement.max));

            if movement.min >= movement.max {
                checks.push(Validation::fail(ConfigViolation::EmptyBounds {
                    min: movement.min,
                    max: movement.max,
                }));
            } else {
                let inside = |v: f64| (movement.min..=movement.max).contains(&v);
                if !inside(start.x) || !inside(start.y) {
                    checks.push(Validation::fail(ConfigViolation::StartOutOfBounds {
                        x: start.x,
                        y: start.y,
                        min: movement.min,
                        max: movement.max,
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// The state a configured turtle starts in.
    pub fn initial_state(&self) -> TurtleState {
        let start = &self.turtle;
        TurtleState {
            position: Position::new(start.x, start.y),
            heading: normalize_heading(start.heading),
            color: start.color,
            pen: start.pen,
        }
    }

    pub fn move_policy(&self) -> MovePolicy {
        match self.movement.policy {
            PolicyKind::Unbounded => MovePolicy::Unbounded,
            PolicyKind::Bounded => MovePolicy::Bounded {
                min: self.movement.min,
                max: self.movement.max,
            },
        }
    }

    pub fn ink(&self) -> InkSupply {
        InkSupply::without(self.ink.exhausted.iter().copied())
    }

    /// A policy-aware interpreter for this configuration.
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::new()
            .with_move_policy(self.move_policy())
            .with_ink(self.ink())
    }

    /// Turtle functions with the configured scale applied to moves.
    pub fn functions(&self, log: SharedLog) -> TurtleFunctions {
        let functions = TurtleFunctions::normal(log);
        if self.movement.scale == 1.0 {
            functions
        } else {
            functions.scaled(self.movement.scale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, MoveResponse, NoLog};
    use std::io::Write;
    use std::sync::Arc;

    #[test]
    fn empty_document_is_default() {
        let config = TurtleConfig::from_toml_str("").unwrap();
        assert_eq!(config, TurtleConfig::default());
        assert_eq!(config.initial_state(), TurtleState::initial());
        assert_eq!(config.move_policy(), MovePolicy::Unbounded);
    }

    #[test]
    fn full_document_builds_runtime_values() {
        let config = TurtleConfig::from_toml_str(
            r#"
            [turtle]
            x = 95.0
            y = 95.0
            heading = 450.0
            color = "Red"
            pen = "Down"

            [movement]
            policy = "bounded"

            [ink]
            exhausted = ["Blue"]
            "#,
        )
        .unwrap();

        let start = config.initial_state();
        assert_eq!(start.position, Position::new(95.0, 95.0));
        assert_eq!(start.heading, 90.0);
        assert_eq!(start.color, PenColor::Red);
        assert!(start.is_pen_down());
        assert!(!config.ink().has_ink(PenColor::Blue));

        let outcome = config.interpreter().run(&[Command::Move(50.0)], start);
        assert_eq!(outcome.barriers_hit(), 1);
        assert_eq!(outcome.responses.len(), 1);
        assert!(matches!(
            outcome.responses[0],
            crate::interpreter::Response::Move(MoveResponse::HitABarrier)
        ));
    }

    #[test]
    fn validation_reports_every_violation() {
        let config = TurtleConfig {
            turtle: StartConfig {
                heading: f64::NAN,
                ..StartConfig::default()
            },
            movement: MovementConfig {
                policy: PolicyKind::Bounded,
                min: 10.0,
                max: 5.0,
                scale: -1.0,
            },
            ink: InkConfig::default(),
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::NotFinite { field: "turtle.heading" })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::NonPositiveScale(_))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyBounds { .. })));
            }
            Validation::Success(_) => panic!("Expected violations, got success"),
        }
    }

    #[test]
    fn start_outside_bounds_is_rejected() {
        let result = TurtleConfig::from_toml_str(
            r#"
            [turtle]
            x = 150.0

            [movement]
            policy = "bounded"
            "#,
        );
        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations.len(), 1);
                assert!(matches!(
                    violations[0],
                    ConfigViolation::StartOutOfBounds { .. }
                ));
            }
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn unknown_policy_fails_to_parse() {
        let result = TurtleConfig::from_toml_str("[movement]\npolicy = \"sideways\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn scale_applies_to_functions() {
        let config = TurtleConfig::from_toml_str("[movement]\nscale = 0.5").unwrap();
        let functions = config.functions(Arc::new(NoLog));
        let step = functions.apply(&TurtleState::initial(), &Command::Move(100.0));
        assert!(step.state.position.approx_eq(&Position::new(50.0, 0.0), 1e-9));
    }

    #[test]
    fn load_reads_file_and_round_trips() {
        let mut config = TurtleConfig::default();
        config.movement.policy = PolicyKind::Bounded;
        config.ink.exhausted = vec![PenColor::Red];

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes())
            .unwrap();

        assert_eq!(TurtleConfig::load(file.path()).unwrap(), config);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        match TurtleConfig::load(&path) {
            Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected read error, got {other:?}"),
        }
    }
}
