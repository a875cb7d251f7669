//! Configuration for the telemetry engine.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod composition_config;
pub mod dedup_config;
pub mod defaults;
pub mod sanitizer_config;
pub mod telemetry_config;
pub mod usage_config;

pub use composition_config::CompositionConfig;
pub use dedup_config::DedupConfig;
pub use sanitizer_config::SanitizerConfig;
pub use telemetry_config::TelemetryConfig;
pub use usage_config::UsageConfig;
