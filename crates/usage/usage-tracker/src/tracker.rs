//! UsageTracker: the `track` façade.

use std::sync::Arc;

use chrono::{Duration, Utc};

use usage_core::config::{TelemetryConfig, UsageConfig};
use usage_core::constants::PACKAGE_VERSION;
use usage_core::errors::UsageResult;
use usage_core::models::{
    AlreadyTrackedReport, ComponentInstanceRecord, CompositionChange, CompositionEvent, EventType,
    TrackRequest, UsageEvent,
};
use usage_core::traits::{ICompositionHandler, IEventSink, IKeyValueStore};
use usage_context::ProjectContextResolver;
use usage_dedup::{end_session, prune_stale, UsageDeduplicator};
use usage_observability::tracing_setup::events;
use usage_observability::{MetricsSnapshot, TelemetryMetrics};
use usage_props::PropsSanitizer;

use crate::session::{generate_session_id, sampled_in};

/// What a single `track` call did.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackOutcome {
    /// Telemetry is switched off.
    Disabled,
    /// Dropped by sampling.
    SampledOut,
    /// Seen before in this session. The report is only sent in debug mode.
    AlreadyTracked(AlreadyTrackedReport),
    /// First sighting, handed to the sink.
    Emitted(UsageEvent),
}

impl TrackOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted(_))
    }
}

pub struct UsageTracker {
    config: TelemetryConfig,
    session_id: String,
    sanitizer: PropsSanitizer,
    resolver: ProjectContextResolver,
    dedup: UsageDeduplicator,
    sink: Arc<dyn IEventSink>,
    metrics: TelemetryMetrics,
}

impl UsageTracker {
    /// Validates `config` and wires the pipeline. The session id is fixed
    /// for the lifetime of the tracker.
    pub fn new(
        config: &UsageConfig,
        resolver: ProjectContextResolver,
        store: Arc<dyn IKeyValueStore>,
        sink: Arc<dyn IEventSink>,
    ) -> UsageResult<Self> {
        UsageConfig::validate(config)?;
        let sanitizer = PropsSanitizer::with_config(&config.sanitizer);
        let dedup = UsageDeduplicator::with_config(store, &config.dedup, sanitizer.clone());
        let session_id = generate_session_id();
        tracing::debug!(
            session_id = %session_id,
            enabled = config.telemetry.enabled,
            sampling_rate = config.telemetry.sampling_rate,
            "usage tracker started"
        );
        Ok(Self {
            config: config.telemetry.clone(),
            session_id,
            sanitizer,
            resolver,
            dedup,
            sink,
            metrics: TelemetryMetrics::new(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }

    pub fn resolver(&self) -> &ProjectContextResolver {
        &self.resolver
    }

    pub fn deduplicator(&self) -> &UsageDeduplicator {
        &self.dedup
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Gate, sample, sign, dedup, then emit a first-seen usage.
    pub fn track(&self, request: &TrackRequest) -> TrackOutcome {
        if !self.config.enabled {
            self.metrics.record_disabled();
            return TrackOutcome::Disabled;
        }
        if !sampled_in(self.config.sampling_rate) {
            self.metrics.record_sampled_out();
            return TrackOutcome::SampledOut;
        }

        let name = request.component_name.as_str();
        let context = self.resolver.resolve();
        let (safe_props, signature) = self.sanitizer.sign(&request.props, name);
        let decision = self.dedup.should_track_signature(name, &signature, &context);
        if decision.degraded {
            self.metrics.record_storage_degradation();
        }

        if !decision.should_track {
            self.metrics.record_suppressed();
            let record = self.dedup.lookup(&decision.usage_key);
            let report = AlreadyTrackedReport {
                component_name: name.to_string(),
                instance_count: decision.instance_count,
                first_seen: record.as_ref().map(|r| r.first_seen),
                last_seen: record.as_ref().map(|r| r.last_seen),
                usage_key: decision.usage_key,
            };
            if self.config.debug {
                self.metrics.record_diagnostic();
                self.sink.send_diagnostic(&report);
            }
            return TrackOutcome::AlreadyTracked(report);
        }

        let event = UsageEvent {
            event_type: request.event_type,
            component_name: name.to_string(),
            component_props: safe_props,
            instance_count: decision.instance_count,
            props_signature: signature,
            project_context: context,
            package_version: PACKAGE_VERSION.to_string(),
            session_id: self.session_id.clone(),
            timestamp: Utc::now().timestamp_millis(),
            environment: self.config.environment.clone(),
        };
        self.sink.send_usage(&event);
        self.metrics.record_emitted();
        events::usage_emitted(name, &event.props_signature, &event.project_context.page_route);
        TrackOutcome::Emitted(event)
    }

    /// Every usage record of this session, sorted by key.
    pub fn tracked_usages(&self) -> Vec<(String, ComponentInstanceRecord)> {
        self.dedup.tracked_usages()
    }

    /// Forget every dedup record. Returns how many were removed.
    pub fn end_session(&self) -> usize {
        end_session(&self.dedup)
    }

    /// Remove records not seen within `max_age`.
    pub fn prune_stale(&self, max_age: Duration) -> usize {
        prune_stale(&self.dedup, max_age)
    }
}

impl ICompositionHandler for UsageTracker {
    fn on_composition_changed(&self, change: &CompositionChange) {
        if !self.config.enabled {
            self.metrics.record_disabled();
            return;
        }
        let event = CompositionEvent {
            event_type: EventType::CompositionChanged,
            change_type: change.change_type,
            page_composition: change.page_composition.clone(),
            package_version: PACKAGE_VERSION.to_string(),
            session_id: self.session_id.clone(),
            timestamp: Utc::now().timestamp_millis(),
            environment: self.config.environment.clone(),
        };
        self.sink.send_composition(&event);
        self.metrics.record_composition_change();
    }
}

impl std::fmt::Debug for UsageTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsageTracker")
            .field("session_id", &self.session_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
