//! # usage-tracker
//!
//! The telemetry façade. Gates emission behind the enabled flag and
//! sampling, assembles event envelopes, and hands them to an injected sink.
//!
//! ## Modules
//!
//! - `tracker`: `UsageTracker::track` and composition forwarding
//! - `session`: session identifiers and Bernoulli sampling
//! - `sink`: `EventCollector` and `TracingSink`
//! - `binding`: attach/update/detach glue for UI elements

pub mod binding;
pub mod session;
pub mod sink;
pub mod tracker;

pub use binding::ComponentBinding;
pub use session::{generate_session_id, sampled_in};
pub use sink::{CollectedEvent, EventCollector, TracingSink};
pub use tracker::{TrackOutcome, UsageTracker};
