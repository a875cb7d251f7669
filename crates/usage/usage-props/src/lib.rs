//! # usage-props
//!
//! Reduces a component's raw props to an allow-listed, size-bounded,
//! primitive-only summary and signs it.
//!
//! ## Modules
//!
//! - `category`: component name → category lookup, allow-lists, derived roll-ups
//! - `sanitizer`: `PropsSanitizer`
//! - `signature`: order-independent rolling-hash signatures

pub mod category;
pub mod sanitizer;
pub mod signature;

pub use category::ComponentCategory;
pub use sanitizer::PropsSanitizer;
pub use signature::{props_signature, rolling_hash, to_base36};
