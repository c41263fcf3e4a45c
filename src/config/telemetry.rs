//! Telemetry configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, ValidationError};

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TelemetryConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

impl TelemetryConfig {
    /// Parses the filter directive.
    pub fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }

    /// Validate telemetry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.env_filter().map(|_| ())
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,mcda_rank=debug".to_string()
}

/// Installs a global `tracing` subscriber filtered by `log_level`.
///
/// Returns `Ok(false)` when a subscriber was already installed, so repeated
/// calls are harmless.
pub fn init_tracing(telemetry: &TelemetryConfig) -> Result<bool, ConfigError> {
    let filter = telemetry.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if telemetry.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    match installed {
        Ok(()) => Ok(true),
        Err(e) if tracing::dispatcher::has_been_set() => {
            tracing::debug!(error = %e, "Tracing subscriber already installed");
            Ok(false)
        }
        Err(e) => Err(ConfigError::Tracing(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_defaults() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "info,mcda_rank=debug");
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = TelemetryConfig {
            log_level: "mcda_rank=loud".to_string(),
            json: false,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        let config = TelemetryConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(!init_tracing(&config).unwrap());
    }
}
