//! Reference-standards resolution
//!
//! The sole point where external, mutable configuration enters the
//! otherwise pure calculation pipeline. A [`StandardsResolver`] resolves the
//! active reference-limit table once per batch into an immutable
//! [`StandardsSnapshot`], guaranteeing every row of the batch is scored
//! against the same data.
//!
//! Resolution overlays three tiers per chemical symbol, lowest first:
//!
//! 1. built-in defaults (always available)
//! 2. an external [`StandardsSource`] (attempted under the batch's only
//!    timeout; fetch failure is logged and skipped, never surfaced)
//! 3. caller-supplied overrides

pub mod resolver;
pub mod snapshot;
pub mod sources;

#[cfg(test)]
pub mod tests;

pub use resolver::StandardsResolver;
pub use snapshot::StandardsSnapshot;
pub use sources::{FileStandardsSource, NoStandardsSource, StandardsSource};
