//! Whole-table survey ingestion
//!
//! Reads header-first tabular data (header is row 1, data begins at row 2),
//! resolves the column mapping once, and parses every data row with per-row
//! error isolation: one malformed row never aborts the remaining rows.

use super::column_mapping::ColumnMapping;
use super::row_parser::{ParsedRow, parse_row};
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of ingesting one survey table
#[derive(Debug, Clone)]
pub struct IngestResult {
    /// The resolved column mapping, shared by all rows
    pub mapping: ColumnMapping,

    /// Successfully parsed rows, in source order
    pub rows: Vec<ParsedRow>,

    /// Row-level error strings for rows that were rejected
    pub row_errors: Vec<String>,

    /// Total data rows seen (parsed + rejected)
    pub total_rows: usize,
}

/// Ingest a survey table from any reader.
///
/// Returns an error only when the table itself is unusable (no header, or a
/// header with zero data rows); individual bad rows are collected in
/// `row_errors` instead.
pub fn parse_reader<R: Read>(reader: R, source_name: &str) -> Result<IngestResult> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(source_name, "Unable to read header row", Some(e)))?
        .clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(Error::survey_format(source_name, "Header row is empty"));
    }

    let mapping = ColumnMapping::analyze(&headers);
    debug!("Resolved mapping for '{}': {:?}", source_name, mapping.metadata.keys());

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut total_rows = 0usize;

    for (position, result) in csv_reader.records().enumerate() {
        let row_number = position + 1;
        total_rows += 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                row_errors.push(format!("Row {}: {}", row_number, e));
                continue;
            }
        };
        // Skip fully blank rows without counting them as failures
        if record.iter().all(|cell| cell.trim().is_empty()) {
            total_rows -= 1;
            continue;
        }
        match parse_row(&record, &mapping, row_number) {
            Ok(row) => rows.push(row),
            Err(e) => row_errors.push(e.to_string()),
        }
    }

    if total_rows == 0 {
        return Err(Error::survey_format(
            source_name,
            "Table contains a header but no data rows",
        ));
    }

    info!(
        "Ingested '{}': {} rows parsed, {} rejected",
        source_name,
        rows.len(),
        row_errors.len()
    );

    Ok(IngestResult {
        mapping,
        rows,
        row_errors,
        total_rows,
    })
}

/// Ingest a survey table from a CSV file on disk.
pub fn parse_file(path: &Path) -> Result<IngestResult> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path)
        .map_err(|e| Error::io(format!("Unable to open '{}'", display), e))?;
    parse_reader(file, &display)
}

/// Ingest a survey table from an in-memory string.
pub fn parse_str(data: &str, source_name: &str) -> Result<IngestResult> {
    parse_reader(data.as_bytes(), source_name)
}
