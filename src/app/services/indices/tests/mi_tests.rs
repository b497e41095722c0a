//! Tests for the metal index

use super::{standards, values};
use crate::app::models::StandardDefinition;
use crate::app::services::indices::mi::calculate_mi;
use crate::app::services::standards::snapshot::StandardsSnapshot;

#[test]
fn test_mi_reference_survey_row() {
    let metals = values(&[
        ("As", 269.58),
        ("Cd", 6.22),
        ("Cu", 554.98),
        ("Pb", 10.59),
        ("Hg", 0.17),
        ("Ni", 61.83),
        ("Zn", 2587.05),
    ]);
    let snapshot = StandardsSnapshot::builtin();

    let result = calculate_mi(&metals, &snapshot.metals);

    assert_eq!(result.value, Some(12.3279));
    assert_eq!(
        result.classification.as_deref(),
        Some("Class VI - Seriously Affected")
    );
}

#[test]
fn test_mi_is_unweighted_sum_of_mac_ratios() {
    let table = standards(vec![
        StandardDefinition::heavy_metal("Pb", "Lead", 10.0, 0.0, 10.0),
        StandardDefinition::heavy_metal("Cd", "Cadmium", 5.0, 3.0, 3.0),
    ]);

    // 5/10 + 6/3 = 2.5
    let result = calculate_mi(&values(&[("Pb", 5.0), ("Cd", 6.0)]), &table);

    assert_eq!(result.value, Some(2.5));
    assert_eq!(result.terms.len(), 2);
    assert!(result.terms.iter().all(|t| t.weight == 1.0));
}

#[test]
fn test_mi_skips_non_positive_mac() {
    let table = standards(vec![
        StandardDefinition::heavy_metal("Pb", "Lead", 10.0, 0.0, 10.0),
        StandardDefinition::heavy_metal("Cr", "Chromium", 50.0, 0.0, 0.0),
    ]);

    let result = calculate_mi(&values(&[("Pb", 5.0), ("Cr", 100.0)]), &table);

    assert_eq!(result.symbols_used, vec!["Pb".to_string()]);
    assert_eq!(result.value, Some(0.5));
}

#[test]
fn test_mi_with_no_usable_symbols_is_null() {
    let table = standards(vec![StandardDefinition::heavy_metal(
        "Cr", "Chromium", 50.0, 0.0, 0.0,
    )]);

    let result = calculate_mi(&values(&[("Cr", 100.0)]), &table);

    assert!(result.is_insufficient());
}
