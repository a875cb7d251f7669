//! Session-aware usage deduplication.
//!
//! Re-renders and remounts would otherwise produce an unbounded number of
//! events for one logical usage. The first occurrence of a usage key in the
//! session is tracked; repeats only bump the stored instance count.

use std::sync::Arc;

use usage_core::config::DedupConfig;
use usage_core::errors::StorageError;
use usage_core::models::{ComponentInstanceRecord, ProjectContext, Props, UsageDecision};
use usage_core::traits::IKeyValueStore;
use usage_observability::tracing_setup::events;
use usage_props::PropsSanitizer;

/// A store failure together with the operation that hit it.
struct StoreFailure {
    operation: &'static str,
    error: StorageError,
}

impl StoreFailure {
    fn on(operation: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |error| Self { operation, error }
    }
}

/// Decides first-seen vs. repeat for component usages within a session.
///
/// Never fails: any store error degrades the decision to "track"
/// (possible over-counting instead of lost events).
pub struct UsageDeduplicator {
    store: Arc<dyn IKeyValueStore>,
    sanitizer: PropsSanitizer,
    key_prefix: String,
}

impl UsageDeduplicator {
    pub fn new(store: Arc<dyn IKeyValueStore>) -> Self {
        Self::with_config(store, &DedupConfig::default(), PropsSanitizer::new())
    }

    pub fn with_config(
        store: Arc<dyn IKeyValueStore>,
        config: &DedupConfig,
        sanitizer: PropsSanitizer,
    ) -> Self {
        Self {
            store,
            sanitizer,
            key_prefix: config.key_prefix.clone(),
        }
    }

    pub fn store(&self) -> &dyn IKeyValueStore {
        self.store.as_ref()
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// `prefix + repository + "_" + route + "_" + component + "_" + signature`.
    pub fn usage_key(
        &self,
        component_name: &str,
        props_signature: &str,
        context: &ProjectContext,
    ) -> String {
        format!(
            "{}{}_{}_{}_{}",
            self.key_prefix,
            context.repository_name,
            context.page_route,
            component_name,
            props_signature
        )
    }

    /// Sanitize and sign `raw_props`, then decide.
    pub fn should_track_usage(
        &self,
        component_name: &str,
        raw_props: &Props,
        context: &ProjectContext,
    ) -> UsageDecision {
        let (_, signature) = self.sanitizer.sign(raw_props, component_name);
        self.should_track_signature(component_name, &signature, context)
    }

    /// Decide for an already computed props signature.
    pub fn should_track_signature(
        &self,
        component_name: &str,
        props_signature: &str,
        context: &ProjectContext,
    ) -> UsageDecision {
        let usage_key = self.usage_key(component_name, props_signature, context);

        match self.record_occurrence(&usage_key, component_name, props_signature, context) {
            Ok(record) => {
                let first_seen = record.instance_count == 1;
                if !first_seen {
                    events::usage_suppressed(component_name, &usage_key, record.instance_count);
                }
                UsageDecision {
                    should_track: first_seen,
                    usage_key,
                    instance_count: record.instance_count,
                    degraded: false,
                }
            }
            Err(failure) => {
                events::storage_degraded(
                    failure.operation,
                    &usage_key,
                    &failure.error.to_string(),
                );
                UsageDecision {
                    should_track: true,
                    usage_key,
                    instance_count: 1,
                    degraded: true,
                }
            }
        }
    }

    /// Stored record for `usage_key`, if readable.
    pub fn lookup(&self, usage_key: &str) -> Option<ComponentInstanceRecord> {
        match self.store.get(usage_key) {
            Ok(raw) => raw.and_then(|raw| parse_record(usage_key, &raw)),
            Err(e) => {
                events::storage_degraded("get", usage_key, &e.to_string());
                None
            }
        }
    }

    /// All readable records of this session, sorted by usage key.
    pub fn tracked_usages(&self) -> Vec<(String, ComponentInstanceRecord)> {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                events::storage_degraded("keys", &self.key_prefix, &e.to_string());
                return Vec::new();
            }
        };
        let mut records: Vec<_> = keys
            .into_iter()
            .filter(|k| k.starts_with(&self.key_prefix))
            .filter_map(|k| self.lookup(&k).map(|r| (k, r)))
            .collect();
        records.sort_by(|a, b| a.0.cmp(&b.0));
        records
    }

    /// Read-modify-write of one usage record.
    fn record_occurrence(
        &self,
        usage_key: &str,
        component_name: &str,
        props_signature: &str,
        context: &ProjectContext,
    ) -> Result<ComponentInstanceRecord, StoreFailure> {
        let existing = self
            .store
            .get(usage_key)
            .map_err(StoreFailure::on("get"))?
            .and_then(|raw| parse_record(usage_key, &raw));

        let record = match existing {
            Some(mut record) => {
                record.touch();
                record
            }
            None => ComponentInstanceRecord::new(component_name, props_signature, context),
        };

        let encoded = serde_json::to_string(&record).map_err(|e| StoreFailure {
            operation: "encode",
            error: StorageError::WriteFailed {
                key: usage_key.to_string(),
                reason: e.to_string(),
            },
        })?;
        self.store
            .set(usage_key, &encoded)
            .map_err(StoreFailure::on("set"))?;

        Ok(record)
    }
}

/// Corrupted records count as a miss.
fn parse_record(usage_key: &str, raw: &str) -> Option<ComponentInstanceRecord> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            events::record_corrupted(usage_key, &e.to_string());
            None
        }
    }
}
