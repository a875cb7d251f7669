//! Outbound event envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChangeType, PageComposition, ProjectContext, Props, SafeProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ComponentMount,
    ComponentUpdate,
    ComponentInteraction,
    CompositionChanged,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComponentMount => "component_mount",
            Self::ComponentUpdate => "component_update",
            Self::ComponentInteraction => "component_interaction",
            Self::CompositionChanged => "composition_changed",
        }
    }
}

/// What the UI layer hands to `track`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRequest {
    pub event_type: EventType,
    pub component_name: String,
    pub props: Props,
}

impl TrackRequest {
    pub fn mount(component_name: impl Into<String>, props: Props) -> Self {
        Self {
            event_type: EventType::ComponentMount,
            component_name: component_name.into(),
            props,
        }
    }

    pub fn update(component_name: impl Into<String>, props: Props) -> Self {
        Self {
            event_type: EventType::ComponentUpdate,
            component_name: component_name.into(),
            props,
        }
    }
}

/// A first-seen component usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    pub event_type: EventType,
    pub component_name: String,
    pub component_props: SafeProps,
    pub instance_count: u64,
    pub props_signature: String,
    pub project_context: ProjectContext,
    pub package_version: String,
    pub session_id: String,
    /// Unix milliseconds.
    pub timestamp: i64,
    pub environment: String,
}

/// A coalesced page composition change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionEvent {
    pub event_type: EventType,
    pub change_type: ChangeType,
    pub page_composition: PageComposition,
    pub package_version: String,
    pub session_id: String,
    pub timestamp: i64,
    pub environment: String,
}

/// Diagnostic emitted instead of a [`UsageEvent`] for a suppressed repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyTrackedReport {
    pub component_name: String,
    pub instance_count: u64,
    pub first_seen: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,
    pub usage_key: String,
}
