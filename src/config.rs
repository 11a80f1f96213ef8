//! Configuration loading and logging initialization.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Engine defaults applied when a subcommand does not override them.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Grid that computed stakes are rounded onto.
    #[serde(default = "default_rounding_increment")]
    pub rounding_increment: Decimal,

    /// Commission applied to legs that do not specify their own.
    #[serde(default)]
    pub default_commission: Decimal,
}

fn default_rounding_increment() -> Decimal {
    dec!(0.01)
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rounding_increment: default_rounding_increment(),
            default_commission: Decimal::ZERO,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr: stdout belongs to the rendered report.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    /// Load from a TOML file, validating after parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Load from a TOML file if it exists, falling back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.engine.rounding_increment <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "rounding_increment",
                reason: format!("must be positive, got {}", self.engine.rounding_increment),
            });
        }
        if self.engine.default_commission < Decimal::ZERO
            || self.engine.default_commission >= Decimal::ONE_HUNDRED
        {
            return Err(ConfigError::InvalidValue {
                field: "default_commission",
                reason: format!(
                    "must be in [0, 100), got {}",
                    self.engine.default_commission
                ),
            });
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                });
            }
        }
        Ok(())
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
