//! # usage-context
//!
//! Resolves the [`ProjectContext`](usage_core::ProjectContext) of the current
//! page. Total: always returns a usable value, including without a page.

pub mod resolver;
pub mod rules;

pub use resolver::ProjectContextResolver;
pub use rules::{AppRule, OrgRule, RuleSource};
