/// Session store errors. Always recovered locally by the caller.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("session storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("storage quota exceeded writing {key}: {bytes} bytes")]
    QuotaExceeded { key: String, bytes: usize },

    #[error("failed to write {key}: {reason}")]
    WriteFailed { key: String, reason: String },
}
