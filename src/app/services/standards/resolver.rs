//! Three-tier standards resolution

use super::snapshot::StandardsSnapshot;
use super::sources::{NoStandardsSource, StandardsSource};
use crate::app::models::StandardDefinition;
use crate::constants::DEFAULT_STANDARDS_TIMEOUT_SECS;
use std::time::Duration;
use tracing::{info, warn};

/// Resolver with an explicit fallback chain:
/// built-in defaults <- external source <- caller overrides.
///
/// Resolution happens once per batch; calculators only ever see the
/// resulting immutable [`StandardsSnapshot`].
#[derive(Debug, Clone)]
pub struct StandardsResolver<S = NoStandardsSource> {
    source: Option<S>,
    fetch_timeout: Duration,
}

impl StandardsResolver<NoStandardsSource> {
    /// Resolver using only built-in defaults and caller overrides
    pub fn builtin_only() -> Self {
        Self {
            source: None,
            fetch_timeout: Duration::from_secs(DEFAULT_STANDARDS_TIMEOUT_SECS),
        }
    }
}

impl<S: StandardsSource> StandardsResolver<S> {
    /// Resolver with an external source tier
    pub fn with_source(source: S, fetch_timeout: Duration) -> Self {
        Self {
            source: Some(source),
            fetch_timeout,
        }
    }

    /// Resolve the active standards table.
    ///
    /// The external fetch is the only operation in a batch allowed to block;
    /// it runs under `fetch_timeout` and any failure (unreachable source,
    /// malformed document, timeout) is logged as a warning and recovered by
    /// falling back to the lower tiers. This method never fails.
    pub async fn resolve(&self, overrides: &[StandardDefinition]) -> StandardsSnapshot {
        let mut snapshot = StandardsSnapshot::builtin();

        if let Some(source) = &self.source {
            match tokio::time::timeout(self.fetch_timeout, source.fetch()).await {
                Ok(Ok(definitions)) => {
                    info!(
                        "Loaded {} standards from external source '{}'",
                        definitions.len(),
                        source.describe()
                    );
                    snapshot.overlay_all(definitions);
                }
                Ok(Err(e)) => {
                    warn!(
                        "Standards source '{}' unavailable, using defaults: {}",
                        source.describe(),
                        e
                    );
                }
                Err(_) => {
                    warn!(
                        "Standards source '{}' timed out after {:?}, using defaults",
                        source.describe(),
                        self.fetch_timeout
                    );
                }
            }
        }

        if !overrides.is_empty() {
            info!("Applying {} caller-supplied standard overrides", overrides.len());
            snapshot.overlay_all(overrides.iter().cloned());
        }

        snapshot
    }
}
