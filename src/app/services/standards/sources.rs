//! External standards sources
//!
//! A [`StandardsSource`] is the collaborator interface for externally
//! persisted, configurable standards. Implementations may block (network,
//! disk); the resolver wraps the fetch in the batch's only timeout and falls
//! back silently when it fails.

use crate::app::models::StandardDefinition;
use crate::{Error, Result};
use std::future::Future;
use std::path::PathBuf;

/// Collaborator that supplies externally configured standards
pub trait StandardsSource: Send + Sync {
    /// Fetch the full list of externally configured standard definitions.
    ///
    /// Failure here is recoverable: the resolver logs a warning and
    /// continues with the lower tiers.
    fn fetch(&self) -> impl Future<Output = Result<Vec<StandardDefinition>>> + Send;

    /// Short human-readable description used in log messages
    fn describe(&self) -> String;
}

/// Placeholder source for resolvers configured without an external tier
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStandardsSource;

impl StandardsSource for NoStandardsSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<StandardDefinition>>> + Send {
        async { Err(Error::standards_source("no external source configured")) }
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

/// Standards source backed by a JSON document on disk.
///
/// The document is a JSON array of standard definitions:
///
/// ```json
/// [{"symbol": "As", "name": "Arsenic", "permissible": 50.0,
///   "ideal": 10.0, "max_allowable": 50.0, "category": "heavy_metal"}]
/// ```
#[derive(Debug, Clone)]
pub struct FileStandardsSource {
    path: PathBuf,
}

impl FileStandardsSource {
    /// Create a source reading from the given JSON file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StandardsSource for FileStandardsSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<StandardDefinition>>> + Send {
        let path = self.path.clone();
        async move {
            let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
                Error::standards_source(format!("unable to read '{}': {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                Error::standards_source(format!("malformed standards document '{}': {}", path.display(), e))
            })
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
