use serde::{Deserialize, Serialize};

use super::defaults;

/// Emission gating for the `track` façade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Opt-out switch. Default: true.
    pub enabled: bool,
    /// Free-form environment label stamped into events ("production", "staging", ...).
    pub environment: String,
    /// Probability in [0, 1] that a `track` call is kept.
    pub sampling_rate: f64,
    /// Emit "already tracked" diagnostics for suppressed repeats.
    pub debug: bool,
    /// Capacity of the in-memory event collector.
    pub collector_capacity: usize,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ENABLED,
            environment: defaults::DEFAULT_ENVIRONMENT.to_string(),
            sampling_rate: defaults::DEFAULT_SAMPLING_RATE,
            debug: defaults::DEFAULT_DEBUG,
            collector_capacity: defaults::DEFAULT_COLLECTOR_CAPACITY,
        }
    }
}
