use crate::errors::StorageError;

/// Session-scoped string key/value store.
///
/// Implementations may fail at any call (quota, disabled storage, no page);
/// callers treat every error as recoverable.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str) -> Result<(), StorageError>;
    /// All keys currently stored, in no particular order.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
