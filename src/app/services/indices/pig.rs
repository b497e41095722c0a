//! Pollution Index of Groundwater (PIG)
//!
//! Composite of two previously computed indices, not of raw concentrations:
//!
//! PIG = sqrt((HPI / 100)^2 + HEI^2) / sqrt(2), rounded to 4 decimals.
//!
//! PIG is the one index permitted to be null purely because a prerequisite
//! is null: when either HPI or HEI carries the insufficient-data sentinel,
//! so does PIG.

use super::classification::classify;
use super::engine::round_to;
use crate::app::models::{CalculationResult, IndexKind};

/// Derive PIG from computed HPI and HEI results.
pub fn calculate_pig(hpi: &CalculationResult, hei: &CalculationResult) -> CalculationResult {
    let index = IndexKind::Pig;
    let (Some(hpi_value), Some(hei_value)) = (hpi.value, hei.value) else {
        return CalculationResult::insufficient(index);
    };

    let raw = ((hpi_value / 100.0).powi(2) + hei_value.powi(2)).sqrt() / 2f64.sqrt();
    let value = round_to(raw, index.precision());

    // The symbols backing PIG are those that backed its inputs
    let mut symbols_used = hpi.symbols_used.clone();
    for symbol in &hei.symbols_used {
        if !symbols_used.contains(symbol) {
            symbols_used.push(symbol.clone());
        }
    }
    symbols_used.sort();

    CalculationResult {
        index,
        value: Some(value),
        classification: Some(classify(index, value).to_string()),
        symbols_used,
        terms: Vec::new(),
    }
}
