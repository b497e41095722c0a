//! Heavy-metal Evaluation Index (HEI)
//!
//! Restricted to designated heavy metals. Sum of plain concentration ratios
//! HEI = sum(Vi / MAC), rounded to 4 decimals. Identical to CDEG without
//! the per-metal subtraction.

use super::classification::classify;
use super::engine::{Aggregation, evaluate, round_to};
use crate::app::models::{CalculationResult, IndexKind, StandardCategory, StandardDefinition};
use std::collections::BTreeMap;

/// Calculate HEI over metal concentrations in ppb.
pub fn calculate_hei(
    metals: &BTreeMap<String, f64>,
    standards: &BTreeMap<String, StandardDefinition>,
) -> CalculationResult {
    let index = IndexKind::Hei;
    let evaluation = evaluate(
        index,
        metals,
        standards,
        |s| s.category == StandardCategory::HeavyMetal && s.max_allowable > 0.0,
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
