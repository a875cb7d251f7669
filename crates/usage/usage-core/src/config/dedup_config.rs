use serde::{Deserialize, Serialize};

use super::defaults;

/// Session dedup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Prefix of every usage key in the session store.
    pub key_prefix: String,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            key_prefix: defaults::DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}
