//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CompositionConfig, DedupConfig, SanitizerConfig, TelemetryConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`USAGE_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UsageConfig {
    pub telemetry: TelemetryConfig,
    pub composition: CompositionConfig,
    pub sanitizer: SanitizerConfig,
    pub dedup: DedupConfig,
}

impl UsageConfig {
    /// Load configuration: defaults, then `path` if given, then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &UsageConfig) -> Result<(), ConfigError> {
        let rate = config.telemetry.sampling_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::ValidationFailed {
                field: "telemetry.sampling_rate".to_string(),
                message: format!("must be between 0.0 and 1.0, got {rate}"),
            });
        }
        if config.composition.debounce_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "composition.debounce_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.sanitizer.max_props_bytes == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "sanitizer.max_props_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.dedup.key_prefix.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "dedup.key_prefix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `USAGE_TELEMETRY_ENABLED`, `USAGE_SAMPLING_RATE`, etc.
    fn apply_env_overrides(config: &mut UsageConfig) {
        if let Ok(val) = std::env::var("USAGE_TELEMETRY_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.telemetry.enabled = v;
            }
        }
        if let Ok(val) = std::env::var("USAGE_SAMPLING_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.telemetry.sampling_rate = v;
            }
        }
        if let Ok(val) = std::env::var("USAGE_ENVIRONMENT") {
            config.telemetry.environment = val;
        }
        if let Ok(val) = std::env::var("USAGE_DEBUG") {
            if let Ok(v) = val.parse::<bool>() {
                config.telemetry.debug = v;
            }
        }
        if let Ok(val) = std::env::var("USAGE_DEBOUNCE_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.composition.debounce_ms = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
