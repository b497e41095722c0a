//! Batch orchestration across parsed rows
//!
//! Invokes each calculator whose prerequisite value category is present for
//! a row: metal concentrations enable HPI/MI/CDEG/HEI (and PIG when both
//! HPI and HEI computed); quality parameters enable WQI independently.

use super::persistence::PersistenceSink;
use super::summary::summarize;
use crate::app::models::{BatchSummary, StationResultBundle};
use crate::app::services::indices::{
    calculate_cdeg, calculate_hei, calculate_hpi, calculate_mi, calculate_pig, calculate_wqi,
};
use crate::app::services::ingestion::{IngestResult, ParsedRow};
use crate::app::services::standards::StandardsSnapshot;
use crate::config::ProcessingConfig;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

/// Structured outcome of one batch run
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Per-station bundles in row order
    pub bundles: Vec<StationResultBundle>,
    /// Aggregate summary for reporting consumers
    pub summary: BatchSummary,
}

/// Compute the index bundle for one parsed row.
///
/// Pure: identical record and snapshot always yield an identical bundle.
pub fn compute_bundle(row: &ParsedRow, snapshot: &StandardsSnapshot) -> StationResultBundle {
    let mut results = Vec::new();

    if row.record.has_metals() {
        let hpi = calculate_hpi(&row.record.metals, &snapshot.metals);
        let mi = calculate_mi(&row.record.metals, &snapshot.metals);
        let cdeg = calculate_cdeg(&row.record.metals, &snapshot.metals);
        let hei = calculate_hei(&row.record.metals, &snapshot.metals);
        let pig = calculate_pig(&hpi, &hei);
        results.extend([hpi, mi, cdeg, hei, pig]);
    }
    if row.record.has_parameters() {
        results.push(calculate_wqi(&row.record.parameters, &snapshot.parameters));
    }

    StationResultBundle {
        record: row.record.clone(),
        results,
        errors: row.warnings.clone(),
    }
}

/// Orchestrates calculation and persistence for one batch
#[derive(Debug)]
pub struct BatchOrchestrator<'a, P: PersistenceSink> {
    sink: &'a P,
    config: &'a ProcessingConfig,
}

impl<'a, P: PersistenceSink> BatchOrchestrator<'a, P> {
    /// Create an orchestrator over a persistence sink
    pub fn new(sink: &'a P, config: &'a ProcessingConfig) -> Self {
        Self { sink, config }
    }

    /// Process an ingested row set against a resolved standards snapshot.
    ///
    /// The snapshot must have been resolved once for this batch; it is never
    /// re-fetched per row. Always returns a structured result: per-row
    /// failures and persistence failures are counted, never propagated.
    pub async fn process(
        &self,
        ingest: &IngestResult,
        snapshot: &StandardsSnapshot,
    ) -> BatchResult {
        info!(
            "Processing batch '{}': {} rows against {} standards",
            self.config.batch_id,
            ingest.rows.len(),
            snapshot.len()
        );

        let progress = self.config.show_progress.then(|| {
            let pb = ProgressBar::new(ingest.rows.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb.set_message("Calculating indices");
            pb
        });

        let mut bundles = Vec::with_capacity(ingest.rows.len());
        for row in &ingest.rows {
            bundles.push(compute_bundle(row, snapshot));
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }
        if let Some(pb) = &progress {
            pb.finish_with_message(format!("Calculated {} stations", bundles.len()));
        }

        // Persistence is per-row and independent; drive all writes and count
        // the outcomes instead of failing the batch.
        let persist_futures = bundles
            .iter()
            .map(|bundle| self.sink.persist(bundle.to_result_record(&self.config.batch_id)));
        let outcomes = join_all(persist_futures).await;

        let mut persisted = 0usize;
        let mut persistence_failures = 0usize;
        for (bundle, outcome) in bundles.iter().zip(outcomes) {
            match outcome {
                Ok(()) => persisted += 1,
                Err(e) => {
                    persistence_failures += 1;
                    warn!("Persisting '{}' failed: {}", bundle.record.station, e);
                }
            }
        }

        let summary = summarize(
            ingest.total_rows,
            &bundles,
            &ingest.row_errors,
            persisted,
            persistence_failures,
        );
        info!(
            "Batch '{}' complete: {} processed, {} failed, {} persisted",
            self.config.batch_id, summary.processed, summary.failed, summary.persisted
        );

        BatchResult { bundles, summary }
    }
}
