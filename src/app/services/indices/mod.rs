//! The six index calculators
//!
//! Pure functions from a symbol->measured-value map and a resolved standards
//! table to a [`CalculationResult`](crate::app::models::CalculationResult).
//! Identical inputs always yield identical outputs; nothing here performs
//! I/O or holds state.
//!
//! All six share one skip/weight/sum pattern, factored into [`engine`]:
//! walk every measured symbol in deterministic order, skip symbols without a
//! standard entry or failing the index's usability rule (Si > Ii for the
//! indices that divide by the ideal margin, MAC > 0 for the MAC-based ones),
//! and aggregate weighted quality terms. Skips are debug-logged, never
//! errors; zero usable symbols yields the insufficient-data sentinel.

pub mod cdeg;
pub mod classification;
pub mod engine;
pub mod hei;
pub mod hpi;
pub mod mi;
pub mod pig;
pub mod wqi;

#[cfg(test)]
pub mod tests;

pub use cdeg::calculate_cdeg;
pub use classification::classify;
pub use hei::calculate_hei;
pub use hpi::calculate_hpi;
pub use mi::calculate_mi;
pub use pig::calculate_pig;
pub use wqi::calculate_wqi;
