//! # usage-dedup
//!
//! At most one emitted usage event per (component, props, page) per session.
//! Repeat occurrences are still counted for diagnostics.
//!
//! ## Modules
//!
//! - `deduplicator`: `UsageDeduplicator`, first-seen vs. repeat decisions
//! - `store`: `MemoryStore` (DashMap) and `UnavailableStore`
//! - `cleanup`: session end and stale record removal

pub mod cleanup;
pub mod deduplicator;
pub mod store;

pub use cleanup::{end_session, prune_stale};
pub use deduplicator::UsageDeduplicator;
pub use store::{MemoryStore, UnavailableStore};
