use usage_core::models::{AlreadyTrackedReport, CompositionEvent, UsageEvent};
use usage_core::traits::IEventSink;

/// Writes every envelope as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl IEventSink for TracingSink {
    fn send_usage(&self, event: &UsageEvent) {
        tracing::info!(
            target: "usage::events",
            event_type = event.event_type.as_str(),
            component = %event.component_name,
            signature = %event.props_signature,
            repository = %event.project_context.repository_name,
            route = %event.project_context.page_route,
            session_id = %event.session_id,
            instance_count = event.instance_count,
            "component usage"
        );
    }

    fn send_composition(&self, event: &CompositionEvent) {
        tracing::info!(
            target: "usage::events",
            event_type = event.event_type.as_str(),
            page_fingerprint = %event.page_composition.page_fingerprint,
            composition_hash = %event.page_composition.composition_hash,
            components = event.page_composition.components.len(),
            session_id = %event.session_id,
            "page composition"
        );
    }

    fn send_diagnostic(&self, report: &AlreadyTrackedReport) {
        tracing::info!(
            target: "usage::events",
            component = %report.component_name,
            instance_count = report.instance_count,
            usage_key = %report.usage_key,
            "component already tracked this session"
        );
    }
}
