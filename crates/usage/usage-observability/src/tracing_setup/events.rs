//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// A first-seen usage event was handed to the sink.
pub fn usage_emitted(component: &str, signature: &str, route: &str) {
    tracing::debug!(
        event = "usage_emitted",
        component = %component,
        signature = %signature,
        route = %route,
        "usage emitted"
    );
}

/// A repeat usage was suppressed by session dedup.
pub fn usage_suppressed(component: &str, usage_key: &str, instance_count: u64) {
    tracing::debug!(
        event = "usage_suppressed",
        component = %component,
        usage_key = %usage_key,
        instance_count = instance_count,
        "usage already tracked this session"
    );
}

/// The session store failed and dedup fell back to always-track.
pub fn storage_degraded(operation: &str, usage_key: &str, error: &str) {
    tracing::warn!(
        event = "storage_degraded",
        operation = %operation,
        usage_key = %usage_key,
        error = %error,
        fallback = "always-track",
        "session storage failed, tracking without dedup"
    );
}

/// A stored record could not be parsed and was treated as a miss.
pub fn record_corrupted(usage_key: &str, error: &str) {
    tracing::warn!(
        event = "record_corrupted",
        usage_key = %usage_key,
        error = %error,
        "discarding unreadable usage record"
    );
}

/// Sanitized props exceeded the size bound and were summarized.
pub fn props_oversized(component: &str, prop_count: usize, bytes: usize, limit: usize) {
    tracing::debug!(
        event = "props_oversized",
        component = %component,
        prop_count = prop_count,
        bytes = bytes,
        limit = limit,
        "props detail dropped"
    );
}

/// A coalesced composition change was delivered.
pub fn composition_changed(fingerprint: &str, hash: &str, entries: usize, change_type: &str) {
    tracing::info!(
        event = "composition_changed",
        page_fingerprint = %fingerprint,
        composition_hash = %hash,
        entries = entries,
        change_type = %change_type,
        "page composition changed"
    );
}

/// A composition change handler panicked. The manager keeps running.
pub fn handler_panicked(fingerprint: &str) {
    tracing::error!(
        event = "handler_panicked",
        page_fingerprint = %fingerprint,
        "composition change handler panicked"
    );
}
