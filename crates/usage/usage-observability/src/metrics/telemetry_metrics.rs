//! Emitted, suppressed, sampled out, degraded.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Lock-free counters shared by the tracker and its handlers.
#[derive(Debug, Default)]
pub struct TelemetryMetrics {
    emitted: AtomicU64,
    suppressed: AtomicU64,
    sampled_out: AtomicU64,
    disabled: AtomicU64,
    diagnostics: AtomicU64,
    composition_changes: AtomicU64,
    storage_degradations: AtomicU64,
}

/// Point-in-time copy of [`TelemetryMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub emitted: u64,
    pub suppressed: u64,
    pub sampled_out: u64,
    pub disabled: u64,
    pub diagnostics: u64,
    pub composition_changes: u64,
    pub storage_degradations: u64,
}

impl MetricsSnapshot {
    /// Fraction of kept `track` calls that dedup suppressed (0.0–1.0).
    pub fn suppression_rate(&self) -> f64 {
        let considered = self.emitted + self.suppressed;
        if considered == 0 {
            return 0.0;
        }
        self.suppressed as f64 / considered as f64
    }
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sampled_out(&self) {
        self.sampled_out.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_disabled(&self) {
        self.disabled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_diagnostic(&self) {
        self.diagnostics.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_composition_change(&self) {
        self.composition_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_degradation(&self) {
        self.storage_degradations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            emitted: self.emitted.load(Ordering::Relaxed),
            suppressed: self.suppressed.load(Ordering::Relaxed),
            sampled_out: self.sampled_out.load(Ordering::Relaxed),
            disabled: self.disabled.load(Ordering::Relaxed),
            diagnostics: self.diagnostics.load(Ordering::Relaxed),
            composition_changes: self.composition_changes.load(Ordering::Relaxed),
            storage_degradations: self.storage_degradations.load(Ordering::Relaxed),
        }
    }
}
