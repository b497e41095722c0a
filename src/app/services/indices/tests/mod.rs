//! Tests for the index calculators

pub mod classification_tests;
pub mod mi_tests;

use crate::app::models::StandardDefinition;
use std::collections::BTreeMap;

/// Measured-value map from literal pairs
pub fn values(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(s, v)| (s.to_string(), *v)).collect()
}

/// Standards map from full definitions
pub fn standards(definitions: Vec<StandardDefinition>) -> BTreeMap<String, StandardDefinition> {
    definitions
        .into_iter()
        .map(|d| (d.symbol.clone(), d))
        .collect()
}
