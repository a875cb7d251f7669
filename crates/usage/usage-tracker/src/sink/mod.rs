//! Event sinks. Transport is out of scope; these are hand-off points.

pub mod collector;
pub mod tracing_sink;

pub use collector::{CollectedEvent, EventCollector};
pub use tracing_sink::TracingSink;
