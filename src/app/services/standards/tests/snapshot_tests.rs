//! Tests for the standards snapshot

use crate::app::models::{StandardCategory, StandardDefinition};
use crate::app::services::standards::snapshot::StandardsSnapshot;

#[test]
fn test_builtin_snapshot_covers_both_categories() {
    let snapshot = StandardsSnapshot::builtin();

    assert!(!snapshot.is_empty());
    assert_eq!(snapshot.metals.len(), 9);
    assert_eq!(snapshot.parameters.len(), 15);

    let arsenic = snapshot.metal("As").unwrap();
    assert_eq!(arsenic.name, "Arsenic");
    assert_eq!(arsenic.permissible, 50.0);
    assert_eq!(arsenic.ideal, 10.0);
    assert_eq!(arsenic.max_allowable, 50.0);
    assert_eq!(arsenic.category, StandardCategory::HeavyMetal);

    let ph = snapshot.parameter("pH").unwrap();
    assert_eq!(ph.permissible, 8.5);
    assert_eq!(ph.ideal, 7.0);
}

#[test]
fn test_symbol_collision_across_categories_is_allowed() {
    // Iron appears as a quality parameter (mg/L); a caller may still supply
    // a heavy-metal iron standard without clobbering it.
    let mut snapshot = StandardsSnapshot::builtin();
    snapshot.overlay(StandardDefinition::heavy_metal("Fe", "Iron", 1000.0, 300.0, 200.0));

    assert_eq!(snapshot.metal("Fe").unwrap().permissible, 1000.0);
    assert_eq!(snapshot.parameter("Fe").unwrap().permissible, 0.3);
}

#[test]
fn test_overlay_replaces_within_category() {
    let mut snapshot = StandardsSnapshot::builtin();
    let before = snapshot.len();

    snapshot.overlay(StandardDefinition::heavy_metal("Pb", "Lead", 100.0, 50.0, 100.0));

    assert_eq!(snapshot.len(), before);
    assert_eq!(snapshot.metal("Pb").unwrap().permissible, 100.0);
    assert_eq!(snapshot.metal("Pb").unwrap().ideal, 50.0);
}

#[test]
fn test_defaults_keep_invariant_violations_for_later_filtering() {
    // Entries with Si <= Ii stay in the snapshot; HPI/WQI exclude them at
    // calculation time instead of the snapshot silently shrinking.
    let mut snapshot = StandardsSnapshot::builtin();
    snapshot.overlay(StandardDefinition::heavy_metal("Cd", "Cadmium", 3.0, 3.0, 3.0));

    let cadmium = snapshot.metal("Cd").unwrap();
    assert!(!cadmium.has_ideal_margin());
}
