#![forbid(unsafe_code)]

//! Process configuration, read once at startup from the environment.
//!
//! Recognized variables:
//!
//! | Variable       | Default                    | Meaning                         |
//! |----------------|----------------------------|---------------------------------|
//! | `AUTO_SAVE`    | `true`                     | persist history on each record  |
//! | `MAX_HISTORY`  | `100`                      | history capacity (≥ 1)          |
//! | `LOG_LEVEL`    | `info`                     | tracing level for diagnostics   |
//! | `HISTORY_FILE` | `calculator_history.csv`   | history file path               |
//! | `MAX_INPUT`    | `1000000`                  | operand magnitude bound         |
//! | `PRECISION`    | `10`                       | display precision (≥ 1)         |
//!
//! Booleans accept `1`/`true` and `0`/`false`, case-insensitively. A value
//! that does not parse is an error, never a silent fallback to the default.
//!
//! Lookups go through an injectable getter so parsing is testable without
//! touching the process environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

/// Default history capacity.
pub const DEFAULT_MAX_HISTORY: usize = 100;
/// Default operand magnitude bound.
pub const DEFAULT_MAX_INPUT: f64 = 1_000_000.0;
/// Default display precision.
pub const DEFAULT_PRECISION: usize = 10;
/// Default history file path, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "calculator_history.csv";

/// A configuration value that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            var,
            value: value.to_string(),
        }
    }
}

/// Immutable process configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub auto_save: bool,
    pub max_history: usize,
    pub log_level: Level,
    pub history_file: PathBuf,
    pub max_input: f64,
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_save: true,
            max_history: DEFAULT_MAX_HISTORY,
            log_level: Level::INFO,
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            max_input: DEFAULT_MAX_INPUT,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(&|name| env::var(name).ok())
    }

    /// Read the configuration through an explicit getter (for tests).
    pub fn from_env_with<F: Fn(&str) -> Option<String>>(get: &F) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = get("AUTO_SAVE") {
            config.auto_save =
                parse_flag(&raw).ok_or_else(|| ConfigError::invalid("AUTO_SAVE", &raw))?;
        }

        if let Some(raw) = get("MAX_HISTORY") {
            let value: usize = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("MAX_HISTORY", &raw))?;
            if value == 0 {
                return Err(ConfigError::invalid("MAX_HISTORY", &raw));
            }
            config.max_history = value;
        }

        if let Some(raw) = get("LOG_LEVEL") {
            config.log_level = Level::from_str(raw.trim())
                .map_err(|_| ConfigError::invalid("LOG_LEVEL", &raw))?;
        }

        if let Some(raw) = get("HISTORY_FILE") {
            if raw.trim().is_empty() {
                return Err(ConfigError::invalid("HISTORY_FILE", &raw));
            }
            config.history_file = PathBuf::from(raw);
        }

        if let Some(raw) = get("MAX_INPUT") {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("MAX_INPUT", &raw))?;
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid("MAX_INPUT", &raw));
            }
            config.max_input = value;
        }

        if let Some(raw) = get("PRECISION") {
            let value: usize = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("PRECISION", &raw))?;
            if value == 0 {
                return Err(ConfigError::invalid("PRECISION", &raw));
            }
            config.precision = value;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    let normalized = raw.trim();
    if normalized == "1" || normalized.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if normalized == "0" || normalized.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    None
}
