//! Tolerant per-row parsing of survey records
//!
//! Converts one raw tabular row into a [`ParsedRecord`] using the resolved
//! column mapping. Numeric text is parsed leniently: everything except
//! digits, the decimal point and a minus sign is stripped, and anything
//! still unparseable is treated as value-absent, never coerced to zero.

use super::column_mapping::{ColumnMapping, ResolvedColumn};
use crate::app::models::ParsedRecord;
use crate::constants::{
    FIELD_DISTRICT, FIELD_LATITUDE, FIELD_LOCATION, FIELD_LONGITUDE, FIELD_STATE, FIELD_YEAR,
    SYNTHETIC_STATION_PREFIX,
};
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// A parsed record together with its non-fatal row warnings
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// The normalized record
    pub record: ParsedRecord,
    /// Non-fatal warnings raised while parsing this row (carried into the
    /// station bundle's error list)
    pub warnings: Vec<String>,
}

/// Leniently parse a numeric cell.
///
/// Strips every character except digits, `.` and `-` (so "1,250 ppb" or
/// "<0.05" still parse), then attempts a float parse. Returns `None` for
/// empty, still-non-numeric, or non-finite results.
pub fn lenient_parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse one raw data row into a normalized record.
///
/// `row_number` is the 1-based data-row position (header excluded), used for
/// diagnostics and for synthesizing a station identity when no location
/// column resolved. A row contributing zero metal values and zero parameter
/// values is a row-level error; the batch continues without it.
pub fn parse_row(
    record: &StringRecord,
    mapping: &ColumnMapping,
    row_number: usize,
) -> Result<ParsedRow> {
    let mut warnings = Vec::new();

    let station = text_field(record, mapping.metadata_column(FIELD_LOCATION))
        .unwrap_or_else(|| format!("{} {}", SYNTHETIC_STATION_PREFIX, row_number));

    let latitude = numeric_field(record, mapping.metadata_column(FIELD_LATITUDE));
    let longitude = numeric_field(record, mapping.metadata_column(FIELD_LONGITUDE));
    let state = text_field(record, mapping.metadata_column(FIELD_STATE));
    let district = text_field(record, mapping.metadata_column(FIELD_DISTRICT));
    let year = text_field(record, mapping.metadata_column(FIELD_YEAR));

    let mut metals = BTreeMap::new();
    for (symbol, column) in &mapping.metals {
        match measurement(record, column, symbol, row_number, &mut warnings) {
            // Metal concentrations are unit-adjusted to ppb per column
            Some(value) => {
                metals.insert((*symbol).to_string(), value * column.multiplier);
            }
            None => continue,
        }
    }

    let mut parameters = BTreeMap::new();
    for (symbol, column) in &mapping.parameters {
        // Parameters pass through in their native unit
        if let Some(value) = measurement(record, column, symbol, row_number, &mut warnings) {
            parameters.insert((*symbol).to_string(), value);
        }
    }

    if metals.is_empty() && parameters.is_empty() {
        return Err(Error::data_validation(format!(
            "Row {}: no usable metal or parameter values",
            row_number
        )));
    }

    Ok(ParsedRow {
        record: ParsedRecord {
            row_number,
            station,
            latitude,
            longitude,
            state,
            district,
            year,
            metals,
            parameters,
            raw_row: record.iter().map(str::to_string).collect(),
        },
        warnings,
    })
}

/// Read a measurement cell, applying the basic non-negative range check.
fn measurement(
    record: &StringRecord,
    column: &ResolvedColumn,
    symbol: &str,
    row_number: usize,
    warnings: &mut Vec<String>,
) -> Option<f64> {
    let raw = record.get(column.index)?.trim();
    if raw.is_empty() {
        return None;
    }
    let value = match lenient_parse_number(raw) {
        Some(v) => v,
        None => {
            debug!("Row {}: unparseable {} value '{}'", row_number, symbol, raw);
            return None;
        }
    };
    if value < 0.0 {
        warnings.push(format!(
            "Row {}: negative {} value {} ignored",
            row_number, symbol, value
        ));
        return None;
    }
    Some(value)
}

/// Read a trimmed, non-empty text cell for an optionally mapped column.
fn text_field(record: &StringRecord, column: Option<&ResolvedColumn>) -> Option<String> {
    column
        .and_then(|c| record.get(c.index))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Read a leniently parsed numeric cell for an optionally mapped column.
fn numeric_field(record: &StringRecord, column: Option<&ResolvedColumn>) -> Option<f64> {
    column
        .and_then(|c| record.get(c.index))
        .and_then(lenient_parse_number)
}
