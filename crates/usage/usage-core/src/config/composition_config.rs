use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Page composition manager configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    /// Trailing-edge quiet window in milliseconds.
    pub debounce_ms: u64,
    /// Unregister components when the UI layer detaches them.
    pub track_unmounts: bool,
    /// Skip a change notification whose hash equals the last one emitted.
    pub suppress_unchanged: bool,
}

impl CompositionConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::DEFAULT_DEBOUNCE_MS,
            track_unmounts: defaults::DEFAULT_TRACK_UNMOUNTS,
            suppress_unchanged: defaults::DEFAULT_SUPPRESS_UNCHANGED,
        }
    }
}
