use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use usage_core::config::TelemetryConfig;
use usage_core::errors::UsageResult;
use usage_core::models::{AlreadyTrackedReport, CompositionEvent, UsageEvent};
use usage_core::traits::IEventSink;

/// One buffered envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollectedEvent {
    Usage(UsageEvent),
    Composition(CompositionEvent),
    Diagnostic(AlreadyTrackedReport),
}

/// Bounded in-memory sink. When full, the oldest event is dropped.
#[derive(Debug)]
pub struct EventCollector {
    capacity: usize,
    buffer: Mutex<VecDeque<CollectedEvent>>,
    dropped: AtomicU64,
}

impl EventCollector {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            dropped: AtomicU64::new(0),
        }
    }

    /// Sized by `telemetry.collector_capacity`.
    pub fn from_config(config: &TelemetryConfig) -> Self {
        Self::new(config.collector_capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// Events evicted because the buffer was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> Vec<CollectedEvent> {
        self.buffer().iter().cloned().collect()
    }

    /// Take every buffered event, oldest first.
    pub fn drain(&self) -> Vec<CollectedEvent> {
        self.buffer().drain(..).collect()
    }

    /// Buffered events as newline-delimited JSON, without draining.
    pub fn to_json_lines(&self) -> UsageResult<String> {
        let mut out = String::new();
        for event in self.buffer().iter() {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }

    fn push(&self, event: CollectedEvent) {
        let mut buffer = self.buffer();
        if buffer.len() >= self.capacity {
            buffer.pop_front();
            let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::warn!(
                capacity = self.capacity,
                dropped = dropped,
                "event collector full, evicting oldest"
            );
        }
        buffer.push_back(event);
    }

    fn buffer(&self) -> MutexGuard<'_, VecDeque<CollectedEvent>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventCollector {
    fn default() -> Self {
        Self::from_config(&TelemetryConfig::default())
    }
}

impl IEventSink for EventCollector {
    fn send_usage(&self, event: &UsageEvent) {
        self.push(CollectedEvent::Usage(event.clone()));
    }

    fn send_composition(&self, event: &CompositionEvent) {
        self.push(CollectedEvent::Composition(event.clone()));
    }

    fn send_diagnostic(&self, report: &AlreadyTrackedReport) {
        self.push(CollectedEvent::Diagnostic(report.clone()));
    }
}
