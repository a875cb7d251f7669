use super::{ConfigError, StorageError};

/// Convenience alias used throughout the workspace.
pub type UsageResult<T> = Result<T, UsageError>;

/// Top-level error for the telemetry engine.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
