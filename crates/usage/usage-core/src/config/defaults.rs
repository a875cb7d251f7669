// Single source of truth for all default values.

// --- Telemetry ---
pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_SAMPLING_RATE: f64 = 1.0;
pub const DEFAULT_DEBUG: bool = false;

// --- Composition ---
pub const DEFAULT_DEBOUNCE_MS: u64 = 1_000;
pub const DEFAULT_TRACK_UNMOUNTS: bool = false;
pub const DEFAULT_SUPPRESS_UNCHANGED: bool = true;

// --- Sanitizer ---
pub const DEFAULT_MAX_PROPS_BYTES: usize = 2_048;

// --- Dedup ---
pub const DEFAULT_KEY_PREFIX: &str = crate::constants::USAGE_KEY_PREFIX;

// --- Collector ---
pub const DEFAULT_COLLECTOR_CAPACITY: usize = 1_000;
