//! Batch orchestration
//!
//! Runs the calculators across all parsed rows, isolates per-row failures,
//! hands flattened station records to the persistence collaborator, and
//! aggregates summary statistics for reporting.
//!
//! - [`orchestrator`] - per-row calculator dispatch and persistence driving
//! - [`summary`] - per-index means and classification histograms
//! - [`persistence`] - the sink collaborator interface and implementations
//!
//! Rows are independent; per-row failures are collected as strings without
//! aborting the batch, and persistence is per-row with aggregate
//! success/failure counts (partial success is an expected outcome).

pub mod orchestrator;
pub mod persistence;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use orchestrator::{BatchOrchestrator, BatchResult, compute_bundle};
pub use persistence::{JsonlSink, MemorySink, NullSink, PersistenceSink};
pub use summary::summarize;
