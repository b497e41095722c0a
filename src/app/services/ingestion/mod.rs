//! Survey table ingestion
//!
//! Turns header-first tabular data with arbitrary column naming into
//! normalized [`ParsedRecord`](crate::app::models::ParsedRecord)s:
//!
//! - [`column_mapping`] - alias-table resolution of raw headers onto
//!   canonical fields, with embedded unit-hint extraction
//! - [`units`] - unit hint parsing and conversion factors to ppb
//! - [`row_parser`] - tolerant per-row numeric parsing and record assembly
//! - [`parser`] - whole-table ingestion with per-row error isolation
//!
//! Mapping is computed once per table and reused for every row. A column
//! that resolves to no canonical field is ignored; a canonical field with no
//! matching column is recorded as absent, never guessed.

pub mod column_mapping;
pub mod parser;
pub mod row_parser;
pub mod units;

#[cfg(test)]
pub mod tests;

pub use column_mapping::{ColumnMapping, ResolvedColumn};
pub use parser::{IngestResult, parse_file, parse_reader, parse_str};
pub use row_parser::{ParsedRow, lenient_parse_number, parse_row};
pub use units::{multiplier_for_unit, split_unit_suffix};
