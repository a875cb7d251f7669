use std::collections::BTreeMap;

use usage_core::models::{ComponentSummary, SafeProps};

/// Live instances of one `(name, signature)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub count: u64,
    /// Sanitized props the signature was computed from.
    pub props: SafeProps,
}

/// `(component name, props signature) -> instance count`.
///
/// Entries are removed when their count reaches zero, so a count is never
/// zero or negative. Keys are ordered, which makes summaries deterministic.
#[derive(Debug, Clone, Default)]
pub struct CompositionRegistry {
    entries: BTreeMap<(String, String), RegistryEntry>,
}

impl CompositionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with count 1 or increment. Returns the new count.
    pub fn register(&mut self, name: &str, signature: &str, props: SafeProps) -> u64 {
        let entry = self
            .entries
            .entry((name.to_string(), signature.to_string()))
            .or_insert(RegistryEntry { count: 0, props });
        entry.count += 1;
        entry.count
    }

    /// Decrement, removing the entry at zero. Returns the remaining count,
    /// or `None` if the pair was never registered.
    pub fn unregister(&mut self, name: &str, signature: &str) -> Option<u64> {
        let key = (name.to_string(), signature.to_string());
        let entry = self.entries.get_mut(&key)?;
        entry.count = entry.count.saturating_sub(1);
        let remaining = entry.count;
        if remaining == 0 {
            self.entries.remove(&key);
        }
        Some(remaining)
    }

    pub fn get(&self, name: &str, signature: &str) -> Option<&RegistryEntry> {
        self.entries.get(&(name.to_string(), signature.to_string()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct `(name, signature)` pairs.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_instances(&self) -> u64 {
        self.entries.values().map(|e| e.count).sum()
    }

    /// Triples sorted by `(name, signature)`.
    pub fn summaries(&self) -> Vec<ComponentSummary> {
        self.entries
            .iter()
            .map(|((name, signature), entry)| ComponentSummary {
                name: name.clone(),
                signature: signature.clone(),
                count: entry.count,
            })
            .collect()
    }
}
