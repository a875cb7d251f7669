pub mod composition;
pub mod project_context;
pub mod props;
pub mod usage_event;
pub mod usage_record;

pub use composition::{
    ChangeType, ComponentSummary, CompositionChange, CompositionStatus, PageComposition,
};
pub use project_context::{
    BuildMetadata, PackageMetadata, PageEnvironment, PageLocation, ProjectContext,
};
pub use props::{OpaqueKind, PropValue, Props, SafeProps};
pub use usage_event::{
    AlreadyTrackedReport, CompositionEvent, EventType, TrackRequest, UsageEvent,
};
pub use usage_record::{ComponentInstanceRecord, UsageDecision};
