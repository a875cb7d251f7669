//! Error handling for the telemetry engine.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod storage_error;
pub mod usage_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;
pub use usage_error::{UsageError, UsageResult};
