use crate::models::{AlreadyTrackedReport, CompositionEvent, UsageEvent};

/// Hand-off point to the (external) event transport.
///
/// Diagnostics have a no-op default so transports only need the two
/// analytics methods.
pub trait IEventSink: Send + Sync {
    fn send_usage(&self, event: &UsageEvent);
    fn send_composition(&self, event: &CompositionEvent);
    fn send_diagnostic(&self, _report: &AlreadyTrackedReport) {}
}
