//! Order independence and sensitivity of the composition hash.

use proptest::prelude::*;

use usage_composition::PageCompositionManager;
use usage_core::config::CompositionConfig;
use usage_core::models::{ProjectContext, Props};

const NAMES: [&str; 4] = ["Button", "TextInput", "Modal", "Alert"];
const KINDS: [&str; 3] = ["primary", "secondary", "danger"];

fn context() -> ProjectContext {
    ProjectContext {
        page_url: "https://app.acme.internal/orders".into(),
        page_route: "/orders".into(),
        domain: "app.acme.internal".into(),
        repository_name: "acme-dashboard".into(),
        project_version: "1.0.0".into(),
        project_description: None,
    }
}

fn props(kind: usize) -> Props {
    Props::new()
        .with("buttonType", KINDS[kind])
        .with("variant", KINDS[kind])
        .with("title", KINDS[kind])
}

fn manager_with(ops: &[(usize, usize)]) -> PageCompositionManager {
    let manager = PageCompositionManager::new(context(), &CompositionConfig::default());
    for &(name, kind) in ops {
        manager.register_component(NAMES[name], &props(kind));
    }
    manager
}

fn ops() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NAMES.len(), 0..KINDS.len()), 1..40)
}

proptest! {
    #[test]
    fn same_multiset_in_any_order_hashes_equal(
        (original, shuffled) in ops().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = manager_with(&original).composition();
        let b = manager_with(&shuffled).composition();
        prop_assert_eq!(a.composition_hash, b.composition_hash);
        prop_assert_eq!(a.components, b.components);
    }

    #[test]
    fn one_extra_instance_changes_the_hash(ops in ops()) {
        let base = manager_with(&ops);
        let before = base.composition().composition_hash;
        let (name, kind) = ops[0];
        base.register_component(NAMES[name], &props(kind));
        prop_assert_ne!(before, base.composition().composition_hash);
    }

    #[test]
    fn n_registers_then_n_unregisters_empty_the_registry(ops in ops()) {
        let manager = manager_with(&ops);
        for &(name, kind) in ops.iter().rev() {
            prop_assert!(manager.unregister_component(NAMES[name], &props(kind)));
        }
        prop_assert_eq!(manager.get_status().entry_count, 0);
    }
}
