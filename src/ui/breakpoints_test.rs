use super::*;

fn canonical_pairs() -> Vec<(SizeClass, u32)> {
    vec![
        (SizeClass::Xs, 0),
        (SizeClass::Sm, 600),
        (SizeClass::Md, 960),
        (SizeClass::Lg, 1280),
        (SizeClass::Xl, 1920),
    ]
}

// =============================================================
// SizeClass
// =============================================================

#[test]
fn size_class_canonical_order_is_small_to_large() {
    for pair in SizeClass::ALL.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn size_class_parse_round_trips_names() {
    for class in SizeClass::ALL {
        assert_eq!(SizeClass::parse(class.as_str()), Ok(class));
    }
}

#[test]
fn size_class_parse_rejects_undeclared_names() {
    assert_eq!(
        SizeClass::parse("xxl"),
        Err(ConfigurationError::UnknownSizeClass("xxl".to_owned()))
    );
    assert!(SizeClass::parse("XS").is_err());
    assert!(SizeClass::parse("").is_err());
}

// =============================================================
// BreakpointTable construction
// =============================================================

#[test]
fn table_accepts_canonical_thresholds() {
    let table = BreakpointTable::new(&canonical_pairs(), SizeClass::Sm).unwrap();
    assert_eq!(table.threshold(SizeClass::Md), Some(960));
    assert_eq!(table.mobile_alias(), SizeClass::Sm);
}

#[test]
fn table_canonicalizes_input_order() {
    let mut pairs = canonical_pairs();
    pairs.reverse();
    let table = BreakpointTable::new(&pairs, SizeClass::Lg).unwrap();
    let classes: Vec<SizeClass> = table.classes().iter().map(|(c, _)| *c).collect();
    assert_eq!(classes, SizeClass::ALL.to_vec());
}

#[test]
fn table_accepts_equal_adjacent_thresholds() {
    // Non-decreasing, not strictly increasing.
    let pairs = [(SizeClass::Xs, 0), (SizeClass::Sm, 600), (SizeClass::Md, 600)];
    assert!(BreakpointTable::new(&pairs, SizeClass::Sm).is_ok());
}

#[test]
fn table_rejects_inverted_thresholds() {
    let pairs = [(SizeClass::Xs, 0), (SizeClass::Sm, 960), (SizeClass::Md, 600)];
    assert_eq!(
        BreakpointTable::new(&pairs, SizeClass::Sm),
        Err(ConfigurationError::NonMonotonicThresholds {
            smaller: SizeClass::Sm,
            smaller_px: 960,
            larger: SizeClass::Md,
            larger_px: 600,
        })
    );
}

#[test]
fn table_rejects_duplicate_class() {
    let pairs = [(SizeClass::Xs, 0), (SizeClass::Xs, 100)];
    assert_eq!(
        BreakpointTable::new(&pairs, SizeClass::Xs),
        Err(ConfigurationError::DuplicateSizeClass(SizeClass::Xs))
    );
}

#[test]
fn table_rejects_undeclared_mobile_alias() {
    let pairs = [(SizeClass::Xs, 0), (SizeClass::Sm, 600)];
    assert_eq!(
        BreakpointTable::new(&pairs, SizeClass::Xl),
        Err(ConfigurationError::UndeclaredMobileAlias(SizeClass::Xl))
    );
}

#[test]
fn table_rejects_empty_input() {
    assert_eq!(
        BreakpointTable::new(&[], SizeClass::Xs),
        Err(ConfigurationError::EmptyBreakpointTable)
    );
}

#[test]
fn default_table_matches_shipped_configuration() {
    let table = BreakpointTable::default();
    assert_eq!(table.threshold(SizeClass::Xs), Some(0));
    assert_eq!(table.threshold(SizeClass::Sm), Some(600));
    assert_eq!(table.threshold(SizeClass::Md), Some(960));
    assert_eq!(table.threshold(SizeClass::Lg), Some(1280));
    assert_eq!(table.threshold(SizeClass::Xl), Some(1920));
    assert_eq!(table.mobile_alias(), SizeClass::Sm);
}

// =============================================================
// Width queries
// =============================================================

#[test]
fn class_for_width_picks_largest_class_at_or_below_width() {
    let table = BreakpointTable::default();
    assert_eq!(table.class_for_width(0), SizeClass::Xs);
    assert_eq!(table.class_for_width(599), SizeClass::Xs);
    assert_eq!(table.class_for_width(600), SizeClass::Sm);
    assert_eq!(table.class_for_width(959), SizeClass::Sm);
    assert_eq!(table.class_for_width(1280), SizeClass::Lg);
    assert_eq!(table.class_for_width(u32::MAX), SizeClass::Xl);
}

#[test]
fn class_for_width_below_smallest_threshold_clamps_to_smallest_class() {
    let pairs = [(SizeClass::Md, 960), (SizeClass::Lg, 1280)];
    let table = BreakpointTable::new(&pairs, SizeClass::Md).unwrap();
    assert_eq!(table.class_for_width(10), SizeClass::Md);
}

#[test]
fn is_mobile_is_strictly_below_alias_threshold() {
    let table = BreakpointTable::default();
    assert!(table.is_mobile(0));
    assert!(table.is_mobile(599));
    assert!(!table.is_mobile(600));
    assert!(!table.is_mobile(1920));
}

// =============================================================
// BreakpointSpec
// =============================================================

#[test]
fn spec_json_converts_into_validated_table() {
    let json = r#"{
        "thresholds": {"xs": 0, "sm": 600, "md": 960, "lg": 1280, "xl": 1920},
        "mobileBreakpoint": "sm"
    }"#;
    let spec = BreakpointSpec::from_json(json).unwrap();
    let table = BreakpointTable::try_from(spec).unwrap();
    assert_eq!(table, BreakpointTable::default());
}

#[test]
fn spec_with_undeclared_mobile_alias_fails_conversion() {
    let spec = BreakpointSpec {
        thresholds: [("xs".to_owned(), 0), ("sm".to_owned(), 600)].into_iter().collect(),
        mobile: "xxl".to_owned(),
    };
    assert_eq!(
        BreakpointTable::try_from(spec),
        Err(ConfigurationError::UnknownSizeClass("xxl".to_owned()))
    );
}

#[test]
fn spec_with_unknown_threshold_class_fails_conversion() {
    let spec = BreakpointSpec {
        thresholds: [("huge".to_owned(), 2400)].into_iter().collect(),
        mobile: "xs".to_owned(),
    };
    assert_eq!(
        BreakpointTable::try_from(spec),
        Err(ConfigurationError::UnknownSizeClass("huge".to_owned()))
    );
}
