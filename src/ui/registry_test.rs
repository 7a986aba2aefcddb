use super::*;

use leptos::prelude::IntoAny;

fn stub_view() -> AnyView {
    "stub".into_any()
}

fn other_view() -> AnyView {
    "other".into_any()
}

// =============================================================
// ComponentRegistry
// =============================================================

#[test]
fn registry_starts_empty() {
    let registry = ComponentRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.get("vehicle-list").is_none());
}

#[test]
fn register_preserves_registration_order() {
    let registry = ComponentRegistry::new()
        .register("vehicle-list", stub_view)
        .unwrap()
        .register("data-table", other_view)
        .unwrap();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["vehicle-list", "data-table"]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn register_rejects_duplicate_name() {
    let result = ComponentRegistry::new()
        .register("vehicle-list", stub_view)
        .unwrap()
        .register("vehicle-list", other_view);
    assert_eq!(
        result.unwrap_err(),
        ConfigurationError::DuplicateComponent("vehicle-list".to_owned())
    );
}

#[test]
fn get_finds_registered_component() {
    let registry = ComponentRegistry::new().register("vehicle-list", stub_view).unwrap();
    assert!(registry.get("vehicle-list").is_some());
    assert!(registry.get("unknown").is_none());
}

// =============================================================
// UiPluginConfig
// =============================================================

#[test]
fn config_exposes_both_parts() {
    let registry = ComponentRegistry::new().register("vehicle-list", stub_view).unwrap();
    let config = UiPluginConfig::new(registry, BreakpointTable::default());
    assert_eq!(config.components().len(), 1);
    assert_eq!(
        config.breakpoints().mobile_alias(),
        crate::ui::breakpoints::SizeClass::Sm
    );
}

#[test]
fn config_is_cheap_to_clone_for_context() {
    let config = UiPluginConfig::new(ComponentRegistry::new(), BreakpointTable::default());
    let copy = config.clone();
    assert!(copy.components().is_empty());
}
