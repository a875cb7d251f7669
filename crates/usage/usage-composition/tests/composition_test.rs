use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use usage_composition::{composition_hash, page_fingerprint, CompositionRegistry, PageCompositionManager};
use usage_core::config::CompositionConfig;
use usage_core::models::{ChangeType, CompositionChange, ComponentSummary, ProjectContext, Props, SafeProps};

fn context(route: &str) -> ProjectContext {
    ProjectContext {
        page_url: format!("https://app.acme.internal{route}"),
        page_route: route.to_string(),
        domain: "app.acme.internal".into(),
        repository_name: "acme-dashboard".into(),
        project_version: "1.0.0".into(),
        project_description: None,
    }
}

fn button(kind: &str) -> Props {
    Props::new().with("buttonType", kind).with("size", "md")
}

/// Records every delivered change.
fn recording_manager(route: &str) -> (PageCompositionManager, Arc<Mutex<Vec<CompositionChange>>>) {
    let manager = PageCompositionManager::new(context(route), &CompositionConfig::default());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    manager.set_composition_change_handler(Arc::new(move |change: &CompositionChange| {
        sink.lock().unwrap().push(change.clone());
    }));
    (manager, seen)
}

// ── Registry ──────────────────────────────────────────────────────────────

#[test]
fn registry_counts_and_removes_at_zero() {
    let mut registry = CompositionRegistry::new();
    assert_eq!(registry.register("Button", "abc", SafeProps::default()), 1);
    assert_eq!(registry.register("Button", "abc", SafeProps::default()), 2);
    assert_eq!(registry.unregister("Button", "abc"), Some(1));
    assert_eq!(registry.unregister("Button", "abc"), Some(0));
    assert!(registry.is_empty());
    assert_eq!(registry.unregister("Button", "abc"), None);
}

#[test]
fn registry_summaries_are_sorted() {
    let mut registry = CompositionRegistry::new();
    registry.register("Modal", "m1", SafeProps::default());
    registry.register("Button", "b2", SafeProps::default());
    registry.register("Button", "b1", SafeProps::default());
    let names: Vec<_> = registry
        .summaries()
        .into_iter()
        .map(|s| format!("{}:{}", s.name, s.signature))
        .collect();
    assert_eq!(names, vec!["Button:b1", "Button:b2", "Modal:m1"]);
    assert_eq!(registry.total_instances(), 3);
}

// ── Fingerprinting ────────────────────────────────────────────────────────

#[test]
fn composition_hash_ignores_input_order() {
    let a = ComponentSummary { name: "Button".into(), signature: "x".into(), count: 2 };
    let b = ComponentSummary { name: "Modal".into(), signature: "y".into(), count: 1 };
    assert_eq!(
        composition_hash(&[a.clone(), b.clone()]),
        composition_hash(&[b.clone(), a.clone()])
    );

    let mut bumped = a.clone();
    bumped.count = 3;
    assert_ne!(composition_hash(&[a, b.clone()]), composition_hash(&[bumped, b]));
}

#[test]
fn composition_hash_separates_fields() {
    let joined = ComponentSummary { name: "ab".into(), signature: "c".into(), count: 1 };
    let split = ComponentSummary { name: "a".into(), signature: "bc".into(), count: 1 };
    assert_ne!(composition_hash(&[joined]), composition_hash(&[split]));
}

#[test]
fn page_fingerprint_depends_on_route() {
    assert_eq!(page_fingerprint(&context("/orders")), page_fingerprint(&context("/orders")));
    assert_ne!(page_fingerprint(&context("/orders")), page_fingerprint(&context("/billing")));
}

// ── Manager without a runtime ─────────────────────────────────────────────

#[test]
fn register_then_unregister_restores_empty_registry() {
    let (manager, _) = recording_manager("/orders");
    for _ in 0..7 {
        manager.register_component("Button", &button("primary"));
    }
    assert_eq!(manager.get_status().total_instances, 7);
    for _ in 0..7 {
        assert!(manager.unregister_component("Button", &button("primary")));
    }
    let status = manager.get_status();
    assert_eq!(status.entry_count, 0);
    assert_eq!(status.total_instances, 0);
}

#[test]
fn unregister_of_unknown_pair_is_noop() {
    let (manager, seen) = recording_manager("/orders");
    assert!(!manager.unregister_component("Button", &button("ghost")));
    let status = manager.get_status();
    assert!(!status.dirty);
    assert!(!status.pending_flush);
    assert!(manager.flush().is_none());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn flush_delivers_without_runtime() {
    let (manager, seen) = recording_manager("/orders");
    manager.register_component("Button", &button("primary"));
    manager.register_component("Button", &button("primary"));

    let status = manager.get_status();
    assert!(status.dirty);
    assert!(!status.pending_flush);

    let change = manager.flush().expect("pending change");
    assert_eq!(change.change_type, ChangeType::Initial);
    assert_eq!(change.page_composition.total_instances(), 2);
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert!(manager.flush().is_none());
    assert_eq!(
        manager.get_status().last_emitted_hash.as_deref(),
        Some(change.page_composition.composition_hash.as_str())
    );
}

#[test]
fn change_types_follow_the_page_lifecycle() {
    let (manager, _) = recording_manager("/orders");
    manager.register_component("Button", &button("primary"));
    assert_eq!(manager.flush().map(|c| c.change_type), Some(ChangeType::Initial));

    manager.register_component("Modal", &Props::new().with("title", "Confirm"));
    assert_eq!(manager.flush().map(|c| c.change_type), Some(ChangeType::Updated));

    manager.unregister_component("Button", &button("primary"));
    manager.unregister_component("Modal", &Props::new().with("title", "Confirm"));
    assert_eq!(manager.flush().map(|c| c.change_type), Some(ChangeType::Cleared));
}

#[test]
fn churn_back_to_the_emitted_state_is_suppressed() {
    let (manager, seen) = recording_manager("/orders");
    manager.register_component("Button", &button("primary"));
    manager.flush();

    manager.register_component("Button", &button("secondary"));
    manager.unregister_component("Button", &button("secondary"));
    assert!(manager.flush().is_none());
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn mount_then_unmount_before_first_emission_reports_nothing() {
    let (manager, seen) = recording_manager("/orders");
    manager.register_component("Button", &button("primary"));
    manager.unregister_component("Button", &button("primary"));
    assert!(manager.flush().is_none());
    assert!(seen.lock().unwrap().is_empty());
    assert!(!manager.get_status().dirty);
}

#[test]
fn unchanged_emissions_are_delivered_when_suppression_is_off() {
    let config = CompositionConfig { suppress_unchanged: false, ..Default::default() };
    let manager = PageCompositionManager::new(context("/orders"), &config);
    manager.register_component("Button", &button("primary"));
    manager.flush();

    manager.register_component("Button", &button("secondary"));
    manager.unregister_component("Button", &button("secondary"));
    assert_eq!(manager.flush().map(|c| c.change_type), Some(ChangeType::Updated));
}

#[test]
fn reregister_moves_the_instance() {
    let (manager, _) = recording_manager("/orders");
    let old = manager.register_component("Button", &button("primary"));
    let new = manager.reregister_component("Button", &button("primary"), &button("danger"));
    assert_ne!(old, new);

    let status = manager.get_status();
    assert_eq!(status.entry_count, 1);
    assert_eq!(status.components[0].signature, new);
}

#[test]
fn navigate_flushes_then_resets() {
    let (manager, seen) = recording_manager("/orders");
    manager.register_component("Button", &button("primary"));
    let before = manager.get_status().page_fingerprint;

    manager.navigate(context("/billing"));
    assert_eq!(seen.lock().unwrap().len(), 1);

    let status = manager.get_status();
    assert_eq!(status.page_route, "/billing");
    assert_ne!(status.page_fingerprint, before);
    assert_eq!(status.entry_count, 0);
    assert!(status.last_emitted_hash.is_none());

    manager.register_component("Button", &button("primary"));
    assert_eq!(manager.flush().map(|c| c.change_type), Some(ChangeType::Initial));
}

#[test]
fn panicking_handler_is_contained() {
    let manager = PageCompositionManager::new(context("/orders"), &CompositionConfig::default());
    manager.set_composition_change_handler(Arc::new(|_: &CompositionChange| {
        panic!("handler bug");
    }));
    manager.register_component("Button", &button("primary"));
    assert!(manager.flush().is_some());

    manager.register_component("Button", &button("danger"));
    assert!(manager.get_status().dirty);
}

// ── Debounce ──────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn fifty_registers_coalesce_into_one_emission() {
    let manager = PageCompositionManager::new(context("/orders"), &CompositionConfig::default());
    let calls = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(Mutex::new(None));
    {
        let calls = Arc::clone(&calls);
        let last = Arc::clone(&last);
        manager.set_composition_change_handler(Arc::new(move |change: &CompositionChange| {
            calls.fetch_add(1, Ordering::SeqCst);
            *last.lock().unwrap() = Some(change.clone());
        }));
    }

    for i in 0..50 {
        let kind = if i % 2 == 0 { "primary" } else { "secondary" };
        manager.register_component("Button", &button(kind));
    }
    assert!(manager.get_status().pending_flush);

    tokio::time::sleep(Duration::from_millis(1_100)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let change = last.lock().unwrap().clone().expect("one change");
    assert_eq!(change.page_composition.total_instances(), 50);
    assert_eq!(change.page_composition.components.len(), 2);
    assert!(!manager.get_status().dirty);
}

#[tokio::test(start_paused = true)]
async fn each_mutation_restarts_the_quiet_window() {
    let (manager, seen) = recording_manager("/orders");

    manager.register_component("Button", &button("primary"));
    tokio::time::sleep(Duration::from_millis(600)).await;
    manager.register_component("Button", &button("primary"));
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(seen.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(500)).await;
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].page_composition.total_instances(), 2);
}

#[tokio::test(start_paused = true)]
async fn flush_cancels_the_armed_timer() {
    let (manager, seen) = recording_manager("/orders");
    manager.register_component("Button", &button("primary"));
    assert!(manager.flush().is_some());

    tokio::time::sleep(Duration::from_millis(2_000)).await;
    assert_eq!(seen.lock().unwrap().len(), 1);
}
