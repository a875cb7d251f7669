use std::collections::BTreeMap;

use usage_core::config::SanitizerConfig;
use usage_core::models::{PropValue, Props, SafeProps};
use usage_observability::tracing_setup::events;

use crate::category::ComponentCategory;
use crate::signature::props_signature;

/// Reduces raw props to a [`SafeProps`] summary.
///
/// Pure and deterministic: the output feeds signatures and composition
/// hashes, so identical inputs must always produce identical summaries.
/// Never fails; unserializable values collapse to fixed markers.
#[derive(Debug, Clone)]
pub struct PropsSanitizer {
    max_props_bytes: usize,
}

impl PropsSanitizer {
    pub fn new() -> Self {
        Self::with_config(&SanitizerConfig::default())
    }

    pub fn with_config(config: &SanitizerConfig) -> Self {
        Self {
            max_props_bytes: config.max_props_bytes,
        }
    }

    pub fn max_props_bytes(&self) -> usize {
        self.max_props_bytes
    }

    /// Sanitize `props` for `component_name`.
    pub fn sanitize(&self, props: &Props, component_name: &str) -> SafeProps {
        self.bound(self.detail(props, component_name), props.len(), component_name)
    }

    /// Sanitize and sign in one step.
    ///
    /// The signature is taken from the detailed map before the size bound,
    /// so distinct oversized props still sign differently.
    pub fn sign(&self, props: &Props, component_name: &str) -> (SafeProps, String) {
        let detailed = self.detail(props, component_name);
        let signature = props_signature(&detailed);
        (self.bound(detailed, props.len(), component_name), signature)
    }

    /// Derived values merged over raw props, filtered to the allow-list.
    fn detail(&self, props: &Props, component_name: &str) -> SafeProps {
        let category = ComponentCategory::from_component_name(component_name);

        let derived = category.derive(props);
        let mut merged: BTreeMap<&str, &PropValue> =
            props.iter().map(|(k, v)| (k.as_str(), v)).collect();
        for (key, value) in &derived {
            merged.insert(*key, value);
        }

        let detailed: BTreeMap<String, String> = category
            .allowed_keys()
            .iter()
            .filter_map(|key| {
                merged
                    .get(key)
                    .filter(|v| v.is_present())
                    .map(|v| (key.to_string(), stringify(v)))
            })
            .collect();
        SafeProps::Detailed(detailed)
    }

    /// Replace detail over `max_props_bytes` with `{oversized, propCount}`.
    fn bound(&self, safe: SafeProps, prop_count: usize, component_name: &str) -> SafeProps {
        let SafeProps::Detailed(detailed) = &safe else {
            return safe;
        };
        let bytes = serde_json::to_string(detailed)
            .map(|s| s.len())
            .unwrap_or(usize::MAX);
        if bytes > self.max_props_bytes {
            events::props_oversized(component_name, prop_count, bytes, self.max_props_bytes);
            return SafeProps::Oversized {
                oversized: true,
                prop_count,
            };
        }
        safe
    }
}

impl Default for PropsSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Primitive-safe string form of a single value.
fn stringify(value: &PropValue) -> String {
    match value {
        PropValue::Opaque(kind) => kind.marker().to_string(),
        PropValue::Array(_) | PropValue::Object(_) => value.to_json().to_string(),
        scalar => scalar.scalar_string().unwrap_or_default(),
    }
}
