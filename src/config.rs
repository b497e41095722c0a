//! Configuration for batch processing runs.
//!
//! Processing parameters that vary per invocation: the standards-fetch
//! timeout, progress reporting, and the batch identifier attached to every
//! persisted record.

use crate::constants::DEFAULT_STANDARDS_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one batch processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Identifier stamped onto every persisted station record of this batch
    pub batch_id: String,

    /// Timeout in seconds for the external standards fetch.
    ///
    /// The fetch runs once per batch; no other operation carries a timeout.
    pub standards_timeout_secs: u64,

    /// Whether to render a progress bar while processing rows
    pub show_progress: bool,
}

impl ProcessingConfig {
    /// Create a configuration for the given batch identifier
    pub fn new(batch_id: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            ..Self::default()
        }
    }

    /// Standards fetch timeout as a [`Duration`]
    pub fn standards_timeout(&self) -> Duration {
        Duration::from_secs(self.standards_timeout_secs)
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            batch_id: "batch".to_string(),
            standards_timeout_secs: DEFAULT_STANDARDS_TIMEOUT_SECS,
            show_progress: false,
        }
    }
}
