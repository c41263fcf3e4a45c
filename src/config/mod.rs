//! Configuration module
//!
//! Type-safe configuration loaded with the `config` and `dotenvy` crates.
//! Environment variables use the `MCDA` prefix and nested values are
//! separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use mcda_rank::config::{init_tracing, McdaConfig};
//!
//! let config = McdaConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.telemetry).expect("Failed to install subscriber");
//!
//! let topsis = config.scoring.build_topsis();
//! ```

mod error;
mod scoring;
mod telemetry;
mod validation;

pub use error::{ConfigError, ValidationError};
pub use scoring::ScoringConfig;
pub use telemetry::{init_tracing, TelemetryConfig};
pub use validation::ValidationConfig;

use std::path::Path;

use serde::Deserialize;

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct McdaConfig {
    /// Scoring strategies (normalization, distance, degenerate policy)
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Input validation (weight tolerance)
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Logging (filter directive, output format)
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl McdaConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `MCDA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDA__SCORING__NORMALIZATION=vector` -> `scoring.normalization = vector`
    /// - `MCDA__VALIDATION__WEIGHT_TOLERANCE=0.001`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on
    /// top. The format follows the file extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the weight tolerance is out of range or
    /// the log filter does not parse.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validation.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default().prefix("MCDA").separator("__")
}
