//! Shared weighted-ratio evaluation engine
//!
//! Every index walks the measured symbols, skips the unusable ones, and
//! aggregates weight x quality terms. The per-index differences (weight
//! function, quality function, usability rule, aggregation) are supplied as
//! closures so the formulas live in exactly one place each.

use crate::app::models::{IndexKind, StandardDefinition, SymbolTerm};
use std::collections::BTreeMap;
use tracing::debug;

/// How the collected terms combine into the raw index value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Sum of contributions
    Sum,
    /// Sum of contributions divided by the sum of weights
    WeightedMean,
}

/// Raw (unrounded, unclassified) outcome of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Aggregated raw value
    pub raw: f64,
    /// Symbols that contributed, in iteration order
    pub symbols_used: Vec<String>,
    /// Per-symbol audit terms
    pub terms: Vec<SymbolTerm>,
}

/// Evaluate one weighted-ratio index over the measured values.
///
/// Symbols without a standard entry, and symbols whose standard fails
/// `usable`, are skipped with a debug log. Returns `None` when zero usable
/// symbols remain, which callers translate into the insufficient-data
/// sentinel (never a numeric zero).
pub fn evaluate(
    index: IndexKind,
    values: &BTreeMap<String, f64>,
    standards: &BTreeMap<String, StandardDefinition>,
    usable: impl Fn(&StandardDefinition) -> bool,
    weight: impl Fn(&StandardDefinition) -> f64,
    quality: impl Fn(f64, &StandardDefinition) -> f64,
    aggregation: Aggregation,
) -> Option<Evaluation> {
    let mut terms = Vec::new();
    let mut symbols_used = Vec::new();
    let mut contribution_sum = 0.0;
    let mut weight_sum = 0.0;

    for (symbol, measured) in values {
        let standard = match standards.get(symbol) {
            Some(standard) => standard,
            None => {
                debug!("{}: no standard entry for '{}', skipped", index, symbol);
                continue;
            }
        };
        if !usable(standard) {
            debug!("{}: standard for '{}' unusable, skipped", index, symbol);
            continue;
        }

        let w = weight(standard);
        let q = quality(*measured, standard);
        let contribution = w * q;
        contribution_sum += contribution;
        weight_sum += w;
        symbols_used.push(symbol.clone());
        terms.push(SymbolTerm {
            symbol: symbol.clone(),
            measured: *measured,
            weight: w,
            quality: q,
            contribution,
        });
    }

    if symbols_used.is_empty() {
        return None;
    }

    let raw = match aggregation {
        Aggregation::Sum => contribution_sum,
        Aggregation::WeightedMean => contribution_sum / weight_sum,
    };
    Some(Evaluation {
        raw,
        symbols_used,
        terms,
    })
}

/// Round to a fixed number of decimal places (half away from zero)
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
