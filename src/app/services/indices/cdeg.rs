//! Degree of contamination (CDEG)
//!
//! Restricted to designated heavy metals. Sum of contamination factors
//! Cfi = Vi / MAC - 1, rounded to 4 decimals. A clean sample therefore
//! yields a negative degree; only values above the MAC push a factor past
//! zero.

use super::classification::classify;
use super::engine::{Aggregation, evaluate, round_to};
use crate::app::models::{CalculationResult, IndexKind, StandardCategory, StandardDefinition};
use std::collections::BTreeMap;

/// Calculate CDEG over metal concentrations in ppb.
pub fn calculate_cdeg(
    metals: &BTreeMap<String, f64>,
    standards: &BTreeMap<String, StandardDefinition>,
) -> CalculationResult {
    let index = IndexKind::Cdeg;
    let evaluation = evaluate(
        index,
        metals,
        standards,
        |s| s.category == StandardCategory::HeavyMetal && s.max_allowable > 0.0,
        |_| 1.0,
        |v, s| v / s.max_allowable - 1.0,
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
