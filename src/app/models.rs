//! Data models for survey ingestion and index calculation
//!
//! This module contains the core data structures: reference standards,
//! normalized survey records, per-index calculation results with their
//! audit breakdowns, and the flattened records handed to persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Reference Standards
// =============================================================================

/// Category of a reference-standard entry.
///
/// CDEG and HEI are restricted to designated heavy metals; the category
/// rides on the definition so caller-supplied overrides can extend the
/// designated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardCategory {
    /// Designated heavy metal, measured in ppb
    HeavyMetal,
    /// Physico-chemical quality parameter, measured in its native unit
    Parameter,
}

/// One reference-standard entry for a chemical symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardDefinition {
    /// Chemical symbol or parameter code (e.g., "As", "pH")
    pub symbol: String,

    /// Human-readable display name (e.g., "Arsenic")
    pub name: String,

    /// Permissible limit Si under the active standard
    pub permissible: f64,

    /// Ideal / background value Ii
    pub ideal: f64,

    /// Maximum allowable concentration, used by MI/CDEG/HEI
    pub max_allowable: f64,

    /// Entry category (heavy metal vs quality parameter)
    pub category: StandardCategory,
}

impl StandardDefinition {
    /// Create a heavy-metal entry (ppb)
    pub fn heavy_metal(
        symbol: impl Into<String>,
        name: impl Into<String>,
        permissible: f64,
        ideal: f64,
        max_allowable: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            permissible,
            ideal,
            max_allowable,
            category: StandardCategory::HeavyMetal,
        }
    }

    /// Create a quality-parameter entry (native unit, no MAC)
    pub fn parameter(
        symbol: impl Into<String>,
        name: impl Into<String>,
        permissible: f64,
        ideal: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            permissible,
            ideal,
            max_allowable: 0.0,
            category: StandardCategory::Parameter,
        }
    }

    /// Whether this entry may participate in indices that divide by
    /// (permissible - ideal). Entries violating Si > Ii are skipped there,
    /// never treated as errors.
    pub fn has_ideal_margin(&self) -> bool {
        self.permissible > self.ideal
    }
}

// =============================================================================
// Parsed Survey Records
// =============================================================================

/// One normalized survey row, ready for calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// 1-based data-row number (header excluded), for diagnostics
    pub row_number: usize,

    /// Station identity, from the mapped column or synthesized from the row
    /// position
    pub station: String,

    /// Latitude in decimal degrees, if a column mapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees, if a column mapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Administrative state / province, if a column mapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Administrative district, if a column mapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Sampling year, if a column mapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Heavy-metal concentrations in ppb, keyed by symbol.
    ///
    /// BTreeMap so calculators walk symbols in a deterministic order.
    pub metals: BTreeMap<String, f64>,

    /// Quality parameters in native units, keyed by symbol
    pub parameters: BTreeMap<String, f64>,

    /// Raw source row, kept for provenance
    pub raw_row: Vec<String>,
}

impl ParsedRecord {
    /// Whether any heavy-metal concentration resolved for this row
    pub fn has_metals(&self) -> bool {
        !self.metals.is_empty()
    }

    /// Whether any quality parameter resolved for this row
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

// =============================================================================
// Calculation Results
// =============================================================================

/// The six supported indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndexKind {
    /// Heavy-metal Pollution Index
    Hpi,
    /// Metal Index
    Mi,
    /// Water Quality Index
    Wqi,
    /// Degree of contamination
    Cdeg,
    /// Heavy-metal Evaluation Index
    Hei,
    /// Pollution Index of Groundwater (composite of HPI and HEI)
    Pig,
}

impl IndexKind {
    /// All indices in reporting order
    pub const ALL: [IndexKind; 6] = [
        IndexKind::Hpi,
        IndexKind::Mi,
        IndexKind::Wqi,
        IndexKind::Cdeg,
        IndexKind::Hei,
        IndexKind::Pig,
    ];

    /// Short uppercase name used in reports and persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Hpi => "HPI",
            IndexKind::Mi => "MI",
            IndexKind::Wqi => "WQI",
            IndexKind::Cdeg => "CDEG",
            IndexKind::Hei => "HEI",
            IndexKind::Pig => "PIG",
        }
    }

    /// Decimal places the index value is rounded to
    pub fn precision(&self) -> u32 {
        match self {
            IndexKind::Hpi | IndexKind::Wqi => 2,
            IndexKind::Mi | IndexKind::Cdeg | IndexKind::Hei | IndexKind::Pig => 4,
        }
    }
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One per-symbol term of an index sum, kept for auditability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolTerm {
    /// Chemical symbol or parameter code
    pub symbol: String,
    /// Measured value in the unit the index expects
    pub measured: f64,
    /// Weight applied to this symbol (1.0 for unweighted indices)
    pub weight: f64,
    /// Quality rating or ratio before weighting
    pub quality: f64,
    /// Contribution of this symbol to the raw sum (weight x quality)
    pub contribution: f64,
}

/// Result of one index calculation for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Which index this result belongs to
    pub index: IndexKind,

    /// Rounded index value; `None` is the insufficient-data sentinel and is
    /// distinct from a numeric zero
    pub value: Option<f64>,

    /// Classification label from the index's threshold table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,

    /// Symbols that actually contributed to the sum
    pub symbols_used: Vec<String>,

    /// Per-symbol breakdown of the sum
    pub terms: Vec<SymbolTerm>,
}

impl CalculationResult {
    /// Insufficient-data result: zero usable symbols
    pub fn insufficient(index: IndexKind) -> Self {
        Self {
            index,
            value: None,
            classification: None,
            symbols_used: Vec::new(),
            terms: Vec::new(),
        }
    }

    /// Whether this result carries the insufficient-data sentinel
    pub fn is_insufficient(&self) -> bool {
        self.value.is_none()
    }
}

// =============================================================================
// Station Bundles and Persisted Records
// =============================================================================

/// All index results for one station, plus non-fatal errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationResultBundle {
    /// The record the bundle was computed from
    pub record: ParsedRecord,

    /// Computed results, at most one per index
    pub results: Vec<CalculationResult>,

    /// Non-fatal per-station error strings
    pub errors: Vec<String>,
}

impl StationResultBundle {
    /// Look up the result for one index, if it was computed for this station
    pub fn result(&self, index: IndexKind) -> Option<&CalculationResult> {
        self.results.iter().find(|r| r.index == index)
    }

    /// Flatten into the record shape the persistence sink accepts
    pub fn to_result_record(&self, batch_id: &str) -> StationResultRecord {
        let field = |index: IndexKind| -> IndexField {
            match self.result(index) {
                Some(r) => IndexField {
                    value: r.value,
                    classification: r.classification.clone(),
                    symbols: r.symbols_used.join(","),
                },
                None => IndexField::default(),
            }
        };

        StationResultRecord {
            batch_id: batch_id.to_string(),
            station: self.record.station.clone(),
            row_number: self.record.row_number,
            state: self.record.state.clone(),
            district: self.record.district.clone(),
            year: self.record.year.clone(),
            latitude: self.record.latitude,
            longitude: self.record.longitude,
            hpi: field(IndexKind::Hpi),
            mi: field(IndexKind::Mi),
            wqi: field(IndexKind::Wqi),
            cdeg: field(IndexKind::Cdeg),
            hei: field(IndexKind::Hei),
            pig: field(IndexKind::Pig),
            errors: self.errors.clone(),
            processed_at: Utc::now(),
        }
    }
}

/// Flattened value/classification/symbols triple for one index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexField {
    /// Rounded value, absent when the index was not computed
    pub value: Option<f64>,
    /// Classification label, absent when the index was not computed
    pub classification: Option<String>,
    /// Comma-joined list of symbols that contributed
    pub symbols: String,
}

/// One flattened station record, as handed to the persistence sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationResultRecord {
    /// Batch / upload identifier the record belongs to
    pub batch_id: String,
    /// Station identity
    pub station: String,
    /// 1-based source data-row number
    pub row_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub hpi: IndexField,
    pub mi: IndexField,
    pub wqi: IndexField,
    pub cdeg: IndexField,
    pub hei: IndexField,
    pub pig: IndexField,
    /// Non-fatal per-station errors carried through for audit
    pub errors: Vec<String>,
    /// When the record was produced
    pub processed_at: DateTime<Utc>,
}

// =============================================================================
// Batch Summary
// =============================================================================

/// Aggregate summary of one processed batch, for reporting consumers.
///
/// Plain serializable data only; no engine-internal types leak through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Total data rows seen in the input
    pub total_rows: usize,
    /// Rows that produced a station bundle
    pub processed: usize,
    /// Rows rejected with row-level errors
    pub failed: usize,
    /// Station records successfully persisted
    pub persisted: usize,
    /// Station records whose persistence failed (non-fatal)
    pub persistence_failures: usize,
    /// Arithmetic mean per index, over stations where the index was computed
    pub index_means: BTreeMap<String, f64>,
    /// Classification histogram per index
    pub classification_counts: BTreeMap<String, BTreeMap<String, usize>>,
    /// Station count per state, for geographic breakdowns
    pub stations_by_state: BTreeMap<String, usize>,
    /// Row-level error strings, in row order
    pub row_errors: Vec<String>,
}
