//! Which page (fingerprint) and what is on it (composition hash).

use usage_core::models::{ComponentSummary, ProjectContext};

const FIELD_SEP: &[u8] = &[0x1f];
const RECORD_SEP: &[u8] = &[0x1e];

/// Identifies the page: repository, route and domain.
pub fn page_fingerprint(context: &ProjectContext) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(context.repository_name.as_bytes());
    hasher.update(FIELD_SEP);
    hasher.update(context.page_route.as_bytes());
    hasher.update(FIELD_SEP);
    hasher.update(context.domain.as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// Deterministic hash over the sorted `(name, signature, count)` triples.
///
/// Input order does not matter; the triples are sorted before hashing.
/// Separator bytes keep `("ab", "c")` and `("a", "bc")` apart.
pub fn composition_hash(components: &[ComponentSummary]) -> String {
    let mut sorted: Vec<&ComponentSummary> = components.iter().collect();
    sorted.sort();

    let mut hasher = blake3::Hasher::new();
    for c in sorted {
        hasher.update(c.name.as_bytes());
        hasher.update(FIELD_SEP);
        hasher.update(c.signature.as_bytes());
        hasher.update(FIELD_SEP);
        hasher.update(&c.count.to_le_bytes());
        hasher.update(RECORD_SEP);
    }
    hasher.finalize().to_hex().to_string()
}
