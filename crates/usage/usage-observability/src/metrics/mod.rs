//! Emission counters.

pub mod telemetry_metrics;

pub use telemetry_metrics::{MetricsSnapshot, TelemetryMetrics};
