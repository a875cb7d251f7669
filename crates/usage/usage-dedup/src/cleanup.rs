//! Session lifecycle for dedup records.
//!
//! Records survive navigation. They are cleared when the session ends, and
//! long-lived sessions can drop records not seen for a while.

use chrono::{Duration, Utc};
use usage_observability::tracing_setup::events;

use crate::deduplicator::UsageDeduplicator;

/// Default age after which an unseen record is pruned: 24 hours.
pub const DEFAULT_MAX_RECORD_AGE: Duration = Duration::hours(24);

/// Remove every usage record of the session. Returns the number removed.
///
/// Keys that do not carry the dedup prefix are left alone.
pub fn end_session(dedup: &UsageDeduplicator) -> usize {
    let store = dedup.store();
    let keys = match store.keys() {
        Ok(keys) => keys,
        Err(e) => {
            events::storage_degraded("keys", dedup.key_prefix(), &e.to_string());
            return 0;
        }
    };

    keys.into_iter()
        .filter(|k| k.starts_with(dedup.key_prefix()))
        .filter(|k| match store.delete(k) {
            Ok(()) => true,
            Err(e) => {
                events::storage_degraded("delete", k, &e.to_string());
                false
            }
        })
        .count()
}

/// Remove records whose `last_seen` is older than `max_age`.
/// Returns the number removed.
pub fn prune_stale(dedup: &UsageDeduplicator, max_age: Duration) -> usize {
    let cutoff = Utc::now() - max_age;
    dedup
        .tracked_usages()
        .into_iter()
        .filter(|(_, record)| record.last_seen < cutoff)
        .filter(|(key, _)| match dedup.store().delete(key) {
            Ok(()) => true,
            Err(e) => {
                events::storage_degraded("delete", key, &e.to_string());
                false
            }
        })
        .count()
}
