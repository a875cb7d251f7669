use std::collections::BTreeMap;

use usage_core::models::*;

fn sample_context() -> ProjectContext {
    ProjectContext {
        page_url: "https://app.acme.internal/orders".into(),
        page_route: "/orders".into(),
        domain: "app.acme.internal".into(),
        repository_name: "acme-dashboard".into(),
        project_version: "1.2.3".into(),
        project_description: None,
    }
}

#[test]
fn props_iterate_in_key_order_regardless_of_insertion() {
    let a = Props::new().with("size", "md").with("buttonType", "primary");
    let b = Props::new().with("buttonType", "primary").with("size", "md");
    assert_eq!(a, b);
    let keys: Vec<_> = a.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["buttonType", "size"]);
}

#[test]
fn prop_truthiness_follows_ui_semantics() {
    assert!(!PropValue::Null.is_truthy());
    assert!(!PropValue::from("").is_truthy());
    assert!(!PropValue::from(0).is_truthy());
    assert!(!PropValue::Number(f64::NAN).is_truthy());
    assert!(PropValue::from(Vec::<PropValue>::new()).is_truthy());
    assert!(PropValue::Opaque(OpaqueKind::Node).is_truthy());
}

#[test]
fn integral_numbers_render_without_fraction() {
    assert_eq!(PropValue::from(3).scalar_string().unwrap(), "3");
    assert_eq!(PropValue::from(2.5).scalar_string().unwrap(), "2.5");
    assert_eq!(PropValue::Null.scalar_string().unwrap(), "null");
}

#[test]
fn props_from_json_object() {
    let props = Props::from_json(serde_json::json!({
        "size": "lg",
        "disabled": true,
        "items": [1, 2, 3]
    }));
    assert_eq!(props.len(), 3);
    assert!(props.is_truthy("disabled"));
    assert_eq!(props.get("items").and_then(PropValue::array_len), Some(3));
    assert!(Props::from_json(serde_json::json!("not an object")).is_empty());
}

#[test]
fn opaque_values_serialize_as_markers() {
    let value = PropValue::Array(vec![
        PropValue::Opaque(OpaqueKind::Function),
        PropValue::Opaque(OpaqueKind::Circular),
    ]);
    assert_eq!(
        value.to_json(),
        serde_json::json!(["[Function]", "[Circular]"])
    );
}

#[test]
fn oversized_safe_props_serialize_compactly() {
    let props = SafeProps::Oversized {
        oversized: true,
        prop_count: 42,
    };
    let json = serde_json::to_value(&props).unwrap();
    assert_eq!(json, serde_json::json!({"oversized": true, "propCount": 42}));
    let back: SafeProps = serde_json::from_value(json).unwrap();
    assert_eq!(back, props);
}

#[test]
fn detailed_safe_props_serialize_as_flat_map() {
    let mut map = BTreeMap::new();
    map.insert("size".to_string(), "md".to_string());
    let json = serde_json::to_value(SafeProps::Detailed(map)).unwrap();
    assert_eq!(json, serde_json::json!({"size": "md"}));
}

#[test]
fn usage_event_uses_wire_field_names() {
    let event = UsageEvent {
        event_type: EventType::ComponentMount,
        component_name: "Button".into(),
        component_props: SafeProps::default(),
        instance_count: 1,
        props_signature: "abc".into(),
        project_context: sample_context(),
        package_version: "0.1.0".into(),
        session_id: "session_1_x".into(),
        timestamp: 1_700_000_000_000,
        environment: "production".into(),
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["eventType"], "component_mount");
    assert_eq!(json["componentName"], "Button");
    assert_eq!(json["projectContext"]["repositoryName"], "acme-dashboard");
    assert_eq!(json["projectContext"]["pageRoute"], "/orders");
    assert!(json["projectContext"].get("projectDescription").is_none());
    assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
}

#[test]
fn instance_record_touch_increments_and_advances() {
    let mut record = ComponentInstanceRecord::new("Button", "sig", &sample_context());
    assert_eq!(record.instance_count, 1);
    assert_eq!(record.first_seen, record.last_seen);
    record.touch();
    assert_eq!(record.instance_count, 2);
    assert!(record.last_seen >= record.first_seen);
}

#[test]
fn page_location_parses_host_and_path() {
    let loc = PageLocation::parse("https://Docs.Example.com:8443/guide/intro?x=1").unwrap();
    assert_eq!(loc.hostname, "docs.example.com");
    assert_eq!(loc.pathname, "/guide/intro");
    assert!(PageLocation::parse("not a url").is_none());
    assert!(PageEnvironment::at("about:blank").location.is_none());
}
