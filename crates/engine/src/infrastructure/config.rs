//! Demo configuration read from the environment.
//!
//! | Variable                          | Default        |
//! |-----------------------------------|----------------|
//! | `MENAGERIE_DUCKBILL_SPEED`        | `10`           |
//! | `MENAGERIE_CIRCLE_COLOR`          | `200,200,100`  |
//! | `MENAGERIE_CIRCLE_CIRCUMFERENCE`  | `10`           |
//! | `MENAGERIE_CUBE_COLOR`            | `222,35,130`   |
//! | `MENAGERIE_CUBE_EDGE`             | `6`            |

use menagerie_domain::{DomainError, Rgb};
use thiserror::Error;

pub const DUCKBILL_SPEED_VAR: &str = "MENAGERIE_DUCKBILL_SPEED";
pub const CIRCLE_COLOR_VAR: &str = "MENAGERIE_CIRCLE_COLOR";
pub const CIRCLE_CIRCUMFERENCE_VAR: &str = "MENAGERIE_CIRCLE_CIRCUMFERENCE";
pub const CUBE_COLOR_VAR: &str = "MENAGERIE_CUBE_COLOR";
pub const CUBE_EDGE_VAR: &str = "MENAGERIE_CUBE_EDGE";

/// A configuration value that could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: expected a number, got '{value}'")]
    NotANumber { var: &'static str, value: String },

    #[error("{var}: expected a positive integer, got '{value}'")]
    NotPositive { var: &'static str, value: String },

    #[error("{var}: expected 'r,g,b', got '{value}'")]
    MalformedColor { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidColor {
        var: &'static str,
        #[source]
        source: DomainError,
    },
}

/// Figure demo parameters
#[derive(Debug, Clone, PartialEq)]
pub struct FigureDemoConfig {
    pub circle_color: Rgb,
    pub circle_circumference: u32,
    pub cube_color: Rgb,
    pub cube_edge: u32,
}

impl Default for FigureDemoConfig {
    fn default() -> Self {
        Self {
            circle_color: Rgb::from_channels(200, 200, 100),
            circle_circumference: 10,
            cube_color: Rgb::from_channels(222, 35, 130),
            cube_edge: 6,
        }
    }
}

/// Everything the demo binary needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub duckbill_speed: f64,
    pub figures: FigureDemoConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duckbill_speed: 10.0,
            figures: FigureDemoConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read through `lookup`; unset or blank variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let duckbill_speed = match get(DUCKBILL_SPEED_VAR) {
            Some(value) => parse_speed(DUCKBILL_SPEED_VAR, value)?,
            None => defaults.duckbill_speed,
        };

        let figures = FigureDemoConfig {
            circle_color: match get(CIRCLE_COLOR_VAR) {
                Some(value) => parse_color(CIRCLE_COLOR_VAR, value)?,
                None => defaults.figures.circle_color,
            },
            circle_circumference: match get(CIRCLE_CIRCUMFERENCE_VAR) {
                Some(value) => parse_length(CIRCLE_CIRCUMFERENCE_VAR, value)?,
                None => defaults.figures.circle_circumference,
            },
            cube_color: match get(CUBE_COLOR_VAR) {
                Some(value) => parse_color(CUBE_COLOR_VAR, value)?,
                None => defaults.figures.cube_color,
            },
            cube_edge: match get(CUBE_EDGE_VAR) {
                Some(value) => parse_length(CUBE_EDGE_VAR, value)?,
                None => defaults.figures.cube_edge,
            },
        };

        Ok(Self {
            duckbill_speed,
            figures,
        })
    }
}

fn parse_speed(var: &'static str, value: String) -> Result<f64, ConfigError> {
    match value.parse::<f64>() {
        Ok(speed) if speed.is_finite() => Ok(speed),
        _ => Err(ConfigError::NotANumber { var, value }),
    }
}

fn parse_length(var: &'static str, value: String) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(length) if length > 0 => Ok(length),
        _ => Err(ConfigError::NotPositive { var, value }),
    }
}

fn parse_color(var: &'static str, value: String) -> Result<Rgb, ConfigError> {
    let parsed: Result<Vec<i64>, _> = value
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect();
    match parsed.as_deref() {
        Ok([r, g, b]) => {
            Rgb::new(*r, *g, *b).map_err(|source| ConfigError::InvalidColor { var, source })
        }
        _ => Err(ConfigError::MalformedColor { var, value }),
    }
}
