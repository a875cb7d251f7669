use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One `(name, signature, count)` triple of a page composition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub name: String,
    pub signature: String,
    pub count: u64,
}

/// Snapshot of what is mounted on a page, derived from the live registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageComposition {
    /// Identifies which page.
    pub page_fingerprint: String,
    /// Sorted by `(name, signature)`.
    pub components: Vec<ComponentSummary>,
    /// Identifies what is on it.
    pub composition_hash: String,
    pub last_updated: DateTime<Utc>,
}

impl PageComposition {
    pub fn total_instances(&self) -> u64 {
        self.components.iter().map(|c| c.count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// First composition emitted for the current page.
    Initial,
    /// Composition changed since the last emission.
    Updated,
    /// Every component has been unregistered.
    Cleared,
}

/// Payload handed to the composition change handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionChange {
    pub change_type: ChangeType,
    pub page_composition: PageComposition,
}

/// Read-only diagnostics snapshot of a composition manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionStatus {
    pub page_fingerprint: String,
    pub page_route: String,
    /// Distinct `(name, signature)` entries.
    pub entry_count: usize,
    /// Sum of all instance counts.
    pub total_instances: u64,
    /// Mutations not yet emitted.
    pub dirty: bool,
    /// A debounce timer is armed.
    pub pending_flush: bool,
    pub composition_hash: String,
    /// Hash of the last emitted composition, if any.
    pub last_emitted_hash: Option<String>,
    pub components: Vec<ComponentSummary>,
}
