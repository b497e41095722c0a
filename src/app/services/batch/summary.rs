//! Batch summary aggregation
//!
//! Derives the plain, serializable aggregates the reporting consumer reads:
//! per-index arithmetic means over rows where the index was actually
//! computed, per-index classification histograms, and a per-state station
//! breakdown. Insufficient-data results never enter a mean or histogram.

use crate::app::models::{BatchSummary, IndexKind, StationResultBundle};
use crate::app::services::indices::engine::round_to;
use std::collections::BTreeMap;

/// Aggregate a finished batch into its reporting summary.
pub fn summarize(
    total_rows: usize,
    bundles: &[StationResultBundle],
    row_errors: &[String],
    persisted: usize,
    persistence_failures: usize,
) -> BatchSummary {
    let mut index_means = BTreeMap::new();
    let mut classification_counts: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();

    for index in IndexKind::ALL {
        let values: Vec<f64> = bundles
            .iter()
            .filter_map(|bundle| bundle.result(index))
            .filter_map(|result| result.value)
            .collect();
        if !values.is_empty() {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            index_means.insert(index.as_str().to_string(), round_to(mean, index.precision()));
        }

        let histogram: BTreeMap<String, usize> = bundles
            .iter()
            .filter_map(|bundle| bundle.result(index))
            .filter_map(|result| result.classification.clone())
            .fold(BTreeMap::new(), |mut counts, label| {
                *counts.entry(label).or_insert(0) += 1;
                counts
            });
        if !histogram.is_empty() {
            classification_counts.insert(index.as_str().to_string(), histogram);
        }
    }

    let mut stations_by_state: BTreeMap<String, usize> = BTreeMap::new();
    for bundle in bundles {
        if let Some(state) = &bundle.record.state {
            *stations_by_state.entry(state.clone()).or_insert(0) += 1;
        }
    }

    BatchSummary {
        total_rows,
        processed: bundles.len(),
        failed: row_errors.len(),
        persisted,
        persistence_failures,
        index_means,
        classification_counts,
        stations_by_state,
        row_errors: row_errors.to_vec(),
    }
}
