//! # usage-observability
//!
//! Structured logging and emission metrics.
//!
//! ## Modules
//!
//! - `tracing_setup`: subscriber initialization and structured events
//! - `metrics`: atomic emission counters with serializable snapshots

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsSnapshot, TelemetryMetrics};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
