//! Alias-table column mapping for loosely-structured survey headers
//!
//! This module resolves raw header strings onto canonical fields (station
//! metadata, heavy-metal symbols, quality parameters) independently of
//! column order or exact naming. Matching is case-insensitive after
//! whitespace/underscore normalization and unit-suffix stripping.
//!
//! Determinism rules:
//! - canonical fields are tried in their declaration order in
//!   [`crate::constants`], never hash order
//! - within a field, the first alias that matches an unclaimed header wins
//! - a claimed header is consumed, so when one raw column could satisfy two
//!   canonical fields the first-declared field keeps it

use super::units::{resolve_multiplier, split_unit_suffix};
use crate::constants::{METADATA_ALIASES, METAL_ALIASES, PARAMETER_ALIASES};
use csv::StringRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// A canonical field resolved to one source column
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumn {
    /// Zero-based column index in the source table
    pub index: usize,

    /// Raw source header, kept for provenance
    pub source: String,

    /// Unit-conversion multiplier parsed from the header hint (1.0 when no
    /// hint or an unrecognized hint was present)
    pub multiplier: f64,
}

/// Resolved association of canonical fields to source columns.
///
/// Computed once per ingestion and reused for every row. Unresolved fields
/// are simply absent from the maps; mapping never fails.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnMapping {
    /// Metadata fields (station identity, coordinates, administrative)
    pub metadata: BTreeMap<&'static str, ResolvedColumn>,

    /// Heavy-metal symbol columns, in declaration order
    pub metals: Vec<(&'static str, ResolvedColumn)>,

    /// Quality-parameter columns, in declaration order
    pub parameters: Vec<(&'static str, ResolvedColumn)>,
}

impl ColumnMapping {
    /// Analyze raw headers and resolve every canonical field that matches.
    ///
    /// Always completes; a table matching nothing yields an empty mapping.
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut normalized: Vec<(String, Option<String>, String)> = Vec::new();
        for header in headers.iter() {
            let (name, unit) = split_unit_suffix(header);
            normalized.push((name.clone(), unit, normalize_header(&name)));
        }
        let mut claimed = vec![false; normalized.len()];

        let mut mapping = ColumnMapping::default();

        for (field, aliases) in METADATA_ALIASES {
            if let Some(column) = claim_first_match(headers, &normalized, &mut claimed, aliases) {
                mapping.metadata.insert(*field, column);
            } else {
                debug!("Metadata field '{}' not found in headers", field);
            }
        }
        for (symbol, aliases) in METAL_ALIASES {
            if let Some(column) = claim_first_match(headers, &normalized, &mut claimed, aliases) {
                mapping.metals.push((*symbol, column));
            }
        }
        for (symbol, aliases) in PARAMETER_ALIASES {
            if let Some(column) = claim_first_match(headers, &normalized, &mut claimed, aliases) {
                mapping.parameters.push((*symbol, column));
            }
        }

        debug!(
            "Column mapping resolved: {} metadata, {} metals, {} parameters of {} headers",
            mapping.metadata.len(),
            mapping.metals.len(),
            mapping.parameters.len(),
            headers.len()
        );
        mapping
    }

    /// Resolved column for a metadata field, if any
    pub fn metadata_column(&self, field: &str) -> Option<&ResolvedColumn> {
        self.metadata.get(field)
    }

    /// Whether any measurement column (metal or parameter) resolved
    pub fn has_measurements(&self) -> bool {
        !self.metals.is_empty() || !self.parameters.is_empty()
    }
}

/// Normalize a header name for alias comparison: lowercase, underscores to
/// spaces, runs of whitespace collapsed, surrounding punctuation trimmed.
fn normalize_header(name: &str) -> String {
    let lowered = name.to_lowercase().replace('_', " ");
    lowered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c == '.' || c == ':' || c == '-')
        .trim()
        .to_string()
}

/// Find the first alias (in declaration order) matching an unclaimed header
/// and claim it. Alias tables store already-normalized spellings.
fn claim_first_match(
    headers: &StringRecord,
    normalized: &[(String, Option<String>, String)],
    claimed: &mut [bool],
    aliases: &[&str],
) -> Option<ResolvedColumn> {
    for alias in aliases {
        for (index, (name, unit, key)) in normalized.iter().enumerate() {
            if claimed[index] || key != alias {
                continue;
            }
            claimed[index] = true;
            let source = headers.get(index).unwrap_or(name).trim().to_string();
            let multiplier = resolve_multiplier(&source, unit.as_deref());
            return Some(ResolvedColumn {
                index,
                source,
                multiplier,
            });
        }
    }
    None
}
