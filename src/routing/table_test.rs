use super::*;

use leptos::prelude::IntoAny;

fn stub_view() -> leptos::prelude::AnyView {
    "stub".into_any()
}

// =============================================================
// RouteEntry::matches
// =============================================================

#[test]
fn literal_entry_matches_itself_with_no_params() {
    let entry = RouteEntry::new("/vehicles", "vehicle-index", stub_view);
    assert_eq!(entry.matches("/vehicles"), Some(vec![]));
    assert_eq!(entry.matches("/other"), None);
}

#[test]
fn pattern_entry_binds_named_segments() {
    let entry = RouteEntry::new("/vehicles/:id", "vehicle-detail", stub_view);
    assert_eq!(
        entry.matches("/vehicles/42"),
        Some(vec![("id".to_owned(), "42".to_owned())])
    );
    assert_eq!(entry.matches("/vehicles"), None);
}

#[test]
fn root_entry_matches_root_only() {
    let entry = RouteEntry::new("/", "home", stub_view);
    assert_eq!(entry.matches("/"), Some(vec![]));
    assert_eq!(entry.matches("/vehicles"), None);
}

// =============================================================
// RouteTable validation
// =============================================================

#[test]
fn table_accepts_well_formed_entries() {
    let table = RouteTable::new(vec![
        RouteEntry::new("/", "home", stub_view),
        RouteEntry::new("/vehicles/:id", "vehicle-detail", stub_view),
    ])
    .unwrap();
    assert_eq!(table.entries().len(), 2);
}

#[test]
fn table_rejects_duplicate_path() {
    let err = RouteTable::new(vec![
        RouteEntry::new("/", "home", stub_view),
        RouteEntry::new("/", "also-home", stub_view),
    ])
    .unwrap_err();
    assert_eq!(err, ConfigurationError::DuplicateRoutePath("/".to_owned()));
}

#[test]
fn table_rejects_duplicate_name() {
    let err = RouteTable::new(vec![
        RouteEntry::new("/", "home", stub_view),
        RouteEntry::new("/vehicles", "home", stub_view),
    ])
    .unwrap_err();
    assert_eq!(err, ConfigurationError::DuplicateRouteName("home".to_owned()));
}

#[test]
fn table_rejects_missing_root_route() {
    let err = RouteTable::new(vec![RouteEntry::new("/vehicles", "vehicle-index", stub_view)])
        .unwrap_err();
    assert_eq!(err, ConfigurationError::MissingRootRoute);
}

#[test]
fn table_order_is_preserved() {
    let table = RouteTable::new(vec![
        RouteEntry::new("/", "home", stub_view),
        RouteEntry::new("/a", "a", stub_view),
        RouteEntry::new("/b", "b", stub_view),
    ])
    .unwrap();
    let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["home", "a", "b"]);
}

// =============================================================
// by_name
// =============================================================

#[test]
fn by_name_finds_entry() {
    let table = RouteTable::new(vec![RouteEntry::new("/", "home", stub_view)]).unwrap();
    assert!(table.by_name("home").is_some());
    assert!(table.by_name("garage").is_none());
}
