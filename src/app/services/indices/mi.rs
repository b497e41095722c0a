//! Metal Index (MI)
//!
//! Unweighted sum of concentration ratios against the maximum allowable
//! concentration: MI = sum(Vi / MAC), rounded to 4 decimals. Metals with a
//! non-positive MAC are skipped.

use super::classification::classify;
use super::engine::{Aggregation, evaluate, round_to};
use crate::app::models::{CalculationResult, IndexKind, StandardDefinition};
use std::collections::BTreeMap;

/// Calculate MI over metal concentrations in ppb.
pub fn calculate_mi(
    metals: &BTreeMap<String, f64>,
    standards: &BTreeMap<String, StandardDefinition>,
) -> CalculationResult {
    let index = IndexKind::Mi;
    let evaluation = evaluate(
        index,
        metals,
        standards,
        |s| s.max_allowable > 0.0,
        |_| 1.0,
        |v, s| v / s.max_allowable,
        Aggregation::Sum,
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
