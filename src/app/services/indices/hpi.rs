//! Heavy-metal Pollution Index (HPI)
//!
//! Weighted mean of per-metal quality ratings:
//!
//! - weight Wi = 1 / Si
//! - quality Qi = |Vi - Ii| / (Si - Ii) x 100
//! - HPI = sum(Wi x Qi) / sum(Wi), rounded to 2 decimals
//!
//! The absolute-difference form of the quality rating is used throughout;
//! metals whose permissible limit does not strictly exceed their ideal value
//! are skipped to avoid division by zero or sign inversion.

use super::classification::classify;
use super::engine::{Aggregation, evaluate, round_to};
use crate::app::models::{CalculationResult, IndexKind, StandardDefinition};
use std::collections::BTreeMap;

/// Calculate HPI over metal concentrations in ppb.
pub fn calculate_hpi(
    metals: &BTreeMap<String, f64>,
    standards: &BTreeMap<String, StandardDefinition>,
) -> CalculationResult {
    let index = IndexKind::Hpi;
    let evaluation = evaluate(
        index,
        metals,
        standards,
        |s| s.has_ideal_margin(),
        |s| 1.0 / s.permissible,
        |v, s| (v - s.ideal).abs() / (s.permissible - s.ideal) * 100.0,
        Aggregation::WeightedMean,
    );

    match evaluation {
        Some(eval) => {
            let value = round_to(eval.raw, index.precision());
            CalculationResult {
                index,
                value: Some(value),
                classification: Some(classify(index, value).to_string()),
                symbols_used: eval.symbols_used,
                terms: eval.terms,
            }
        }
        None => CalculationResult::insufficient(index),
    }
}
