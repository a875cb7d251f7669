use proptest::prelude::*;
use usage_core::models::Props;
use usage_props::PropsSanitizer;

const COMPONENTS: &[&str] = &["Button", "TextInput", "Select", "Modal", "Alert", "Table", "Avatar"];
const KEYS: &[&str] = &[
    "variant", "size", "buttonType", "disabled", "status", "color", "label", "error", "options",
];

fn entries() -> impl Strategy<Value = Vec<(usize, String)>> {
    prop::collection::btree_map(0..KEYS.len(), "[a-z0-9]{0,8}", 0..8)
        .prop_map(|map| map.into_iter().collect())
}

// ── Signatures are independent of key insertion order ─────────────────────

proptest! {
    #[test]
    fn signature_independent_of_insertion_order(
        component in 0..COMPONENTS.len(),
        raw in entries(),
    ) {
        let forward: Props = raw.iter().map(|(k, v)| (KEYS[*k], v.clone())).collect();
        let reversed: Props = raw.iter().rev().map(|(k, v)| (KEYS[*k], v.clone())).collect();

        let sanitizer = PropsSanitizer::new();
        let (_, a) = sanitizer.sign(&forward, COMPONENTS[component]);
        let (_, b) = sanitizer.sign(&reversed, COMPONENTS[component]);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn sanitized_equal_props_have_equal_signatures(
        component in 0..COMPONENTS.len(),
        raw in entries(),
        noise in "[a-z]{1,8}",
    ) {
        let sanitizer = PropsSanitizer::new();
        let base: Props = raw.iter().map(|(k, v)| (KEYS[*k], v.clone())).collect();
        // A key no category allow-lists never changes the sanitized form.
        let noisy = base.clone().with(format!("x-{noise}"), "ignored");

        let (safe_a, sig_a) = sanitizer.sign(&base, COMPONENTS[component]);
        let (safe_b, sig_b) = sanitizer.sign(&noisy, COMPONENTS[component]);
        prop_assert_eq!(safe_a, safe_b);
        prop_assert_eq!(sig_a, sig_b);
    }

    #[test]
    fn signature_is_compact_base36(
        component in 0..COMPONENTS.len(),
        raw in entries(),
    ) {
        let props: Props = raw.iter().map(|(k, v)| (KEYS[*k], v.clone())).collect();
        let (_, sig) = PropsSanitizer::new().sign(&props, COMPONENTS[component]);
        prop_assert!(!sig.is_empty() && sig.len() <= 7);
        prop_assert!(sig.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
