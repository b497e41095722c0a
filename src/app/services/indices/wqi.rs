//! Water Quality Index (WQI), weighted-arithmetic form
//!
//! Two passes over the usable parameters:
//!
//! - pass 1: proportionality constant k = 1 / sum(1 / Si)
//! - pass 2: weight Wi = k / Si, quality Qi = (Vi - Ii) / (Si - Ii) x 100,
//!   WQI = sum(Wi x Qi), rounded to 2 decimals
//!
//! The quality rating is signed (a measurement below ideal lowers the
//! index). Since sum(Wi) = 1 by construction, the plain sum is already the
//! weighted mean.

use super::classification::classify;
use super::engine::{Aggregation, evaluate, round_to};
use crate::app::models::{CalculationResult, IndexKind, StandardDefinition};
use std::collections::BTreeMap;

/// Calculate WQI over quality parameters in their native units.
pub fn calculate_wqi(
    parameters: &BTreeMap<String, f64>,
    standards: &BTreeMap<String, StandardDefinition>,
) -> CalculationResult {
    let index = IndexKind::Wqi;
    let usable = |s: &StandardDefinition| s.permissible > 0.0 && s.has_ideal_margin();

    // Pass 1: k over the symbols that are measured AND usable, so the
    // weights always sum to exactly one for this row.
    let inverse_sum: f64 = parameters
        .keys()
        .filter_map(|symbol| standards.get(symbol))
        .filter(|s| usable(s))
        .map(|s| 1.0 / s.permissible)
        .sum();
    if inverse_sum <= 0.0 {
        return CalculationResult::insufficient(index);
    }
    let k = 1.0 / inverse_sum;

    let evaluation = evaluate(
        index,
        parameters,
        standards,
        usable,
        |s| k / s.permissible,
        |v, s| (v - s.ideal) / (s.permissible - s.ideal) * 100.0,
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
