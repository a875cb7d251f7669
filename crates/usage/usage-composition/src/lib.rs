//! # usage-composition
//!
//! Tracks which component instances are mounted on the current page and
//! reports one coalesced change per burst of mutations.
//!
//! ## Modules
//!
//! - `registry`: `(name, signature) -> count` map, never negative
//! - `fingerprint`: page fingerprint and order-independent composition hash
//! - `manager`: `PageCompositionManager` with trailing-edge debounce

pub mod fingerprint;
pub mod manager;
pub mod registry;

pub use fingerprint::{composition_hash, page_fingerprint};
pub use manager::PageCompositionManager;
pub use registry::{CompositionRegistry, RegistryEntry};
