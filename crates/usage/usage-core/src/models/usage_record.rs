use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProjectContext;

/// Session-scoped record of one logical usage, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstanceRecord {
    pub component_name: String,
    pub props_signature: String,
    pub context: ProjectContext,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub instance_count: u64,
}

impl ComponentInstanceRecord {
    pub fn new(component_name: &str, props_signature: &str, context: &ProjectContext) -> Self {
        let now = Utc::now();
        Self {
            component_name: component_name.to_string(),
            props_signature: props_signature.to_string(),
            context: context.clone(),
            first_seen: now,
            last_seen: now,
            instance_count: 1,
        }
    }

    /// Record another occurrence.
    pub fn touch(&mut self) {
        self.instance_count += 1;
        self.last_seen = Utc::now();
    }
}

/// Outcome of a dedup lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDecision {
    /// True the first time a usage key is seen in the session.
    pub should_track: bool,
    pub usage_key: String,
    pub instance_count: u64,
    /// The session store failed and the decision fell back to always-track.
    #[serde(default)]
    pub degraded: bool,
}
