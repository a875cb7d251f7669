use serde::{Deserialize, Serialize};

use super::defaults;

/// Props sanitizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Maximum serialized size of the detailed props map, in bytes.
    pub max_props_bytes: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            max_props_bytes: defaults::DEFAULT_MAX_PROPS_BYTES,
        }
    }
}
