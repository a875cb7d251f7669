//! # usage-core
//!
//! Foundation crate for the component-usage telemetry engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::UsageConfig;
pub use errors::{UsageError, UsageResult};
pub use models::{
    PageComposition, ProjectContext, PropValue, Props, SafeProps, UsageDecision, UsageEvent,
};
