//! Application constants for the hydroindex engine
//!
//! This module contains the canonical field vocabulary, ordered header alias
//! tables, unit-conversion factors, and the built-in reference-standards
//! table used when no external source or caller override is available.

// =============================================================================
// Canonical Field Names
// =============================================================================

/// Canonical metadata field: station identity
pub const FIELD_LOCATION: &str = "Location";
/// Canonical metadata field: serial number
pub const FIELD_SERIAL: &str = "S.No";
/// Canonical metadata field: state / province
pub const FIELD_STATE: &str = "State";
/// Canonical metadata field: district
pub const FIELD_DISTRICT: &str = "District";
/// Canonical metadata field: sampling year
pub const FIELD_YEAR: &str = "Year";
/// Canonical metadata field: longitude in decimal degrees
pub const FIELD_LONGITUDE: &str = "Longitude";
/// Canonical metadata field: latitude in decimal degrees
pub const FIELD_LATITUDE: &str = "Latitude";

/// Ordered alias table for metadata fields.
///
/// Declaration order is the match order: for each canonical field the first
/// alias that matches an unclaimed header wins, and a claimed header is never
/// considered again. Do not reorder without revisiting the conflict rules.
pub const METADATA_ALIASES: &[(&str, &[&str])] = &[
    (FIELD_SERIAL, &["s.no", "s no", "sno", "sl no", "sl.no", "serial", "serial no", "sample no", "sample id"]),
    (FIELD_STATE, &["state", "province"]),
    (FIELD_DISTRICT, &["district", "taluk", "tehsil", "block"]),
    (
        FIELD_LOCATION,
        &["location", "station", "station name", "site", "site name", "sample location", "sampling location", "village", "place", "well no", "well id"],
    ),
    (FIELD_LONGITUDE, &["longitude", "long", "lon", "lng", "x coordinate"]),
    (FIELD_LATITUDE, &["latitude", "lat", "y coordinate"]),
    (FIELD_YEAR, &["year", "sampling year", "year of sampling"]),
];

/// Ordered alias table for heavy-metal concentration columns.
///
/// These columns are unit-normalized to ppb before calculation. Iron,
/// calcium and magnesium are deliberately absent here: survey tables report
/// them in mg/L alongside the physico-chemical parameters, so they belong to
/// [`PARAMETER_ALIASES`].
pub const METAL_ALIASES: &[(&str, &[&str])] = &[
    ("As", &["as", "arsenic"]),
    ("Cd", &["cd", "cadmium"]),
    ("Cr", &["cr", "chromium", "cr6", "hexavalent chromium"]),
    ("Cu", &["cu", "copper"]),
    ("Hg", &["hg", "mercury"]),
    ("Mn", &["mn", "manganese"]),
    ("Ni", &["ni", "nickel"]),
    ("Pb", &["pb", "lead"]),
    ("Zn", &["zn", "zinc"]),
];

/// Ordered alias table for physico-chemical quality parameters.
///
/// Parameter values pass through in their native unit; the built-in
/// standards for them are expressed in the units survey labs report
/// (mg/L, µS/cm, NTU, pH units).
pub const PARAMETER_ALIASES: &[(&str, &[&str])] = &[
    ("pH", &["ph"]),
    ("EC", &["ec", "electrical conductivity", "conductivity", "sp cond"]),
    ("TDS", &["tds", "total dissolved solids"]),
    ("TH", &["th", "total hardness", "hardness"]),
    ("Ca", &["ca", "calcium"]),
    ("Mg", &["mg", "magnesium"]),
    ("Na", &["na", "sodium"]),
    ("K", &["k", "potassium"]),
    ("Cl", &["cl", "chloride"]),
    ("SO4", &["so4", "sulphate", "sulfate"]),
    ("NO3", &["no3", "nitrate"]),
    ("F", &["f", "fluoride"]),
    ("Fe", &["fe", "iron"]),
    ("Turbidity", &["turbidity", "turb"]),
    ("Alkalinity", &["alkalinity", "total alkalinity", "ta"]),
];

// =============================================================================
// Units
// =============================================================================

/// Unit conversion factors to ppb (µg/L), the canonical metal unit.
///
/// Unit hints are matched case-insensitively after stripping whitespace.
/// ppm is treated as equivalent to mg/L for dilute aqueous samples.
pub mod units {
    /// Factor applied to mg/L and ppm values
    pub const MILLIGRAMS_PER_LITRE: f64 = 1000.0;

    /// Factor applied to µg/L and ppb values (already canonical)
    pub const MICROGRAMS_PER_LITRE: f64 = 1.0;

    /// Recognized unit spellings and their factors, in match order
    pub const FACTORS: &[(&str, f64)] = &[
        ("mg/l", MILLIGRAMS_PER_LITRE),
        ("ppm", MILLIGRAMS_PER_LITRE),
        ("µg/l", MICROGRAMS_PER_LITRE),
        ("ug/l", MICROGRAMS_PER_LITRE),
        ("ppb", MICROGRAMS_PER_LITRE),
    ];
}

// =============================================================================
// Built-in Reference Standards
// =============================================================================

/// Built-in reference standards, the lowest tier of the resolution chain.
///
/// Metal rows are (symbol, name, permissible Si, ideal Ii, max allowable MAC)
/// in ppb, following BIS 10500 drinking-water limits as used by the survey
/// programme. Cadmium carries a permissible limit barely above its ideal
/// value; entries where Si <= Ii are excluded from HPI/WQI at calculation
/// time, never at load time.
pub mod default_standards {
    /// (symbol, display name, permissible, ideal, max allowable), ppb
    pub const HEAVY_METALS: &[(&str, &str, f64, f64, f64)] = &[
        ("As", "Arsenic", 50.0, 10.0, 50.0),
        ("Cd", "Cadmium", 5.0, 3.0, 3.0),
        ("Cr", "Chromium", 50.0, 0.0, 50.0),
        ("Cu", "Copper", 1000.0, 50.0, 1500.0),
        ("Hg", "Mercury", 2.0, 1.0, 1.0),
        ("Mn", "Manganese", 300.0, 100.0, 300.0),
        ("Ni", "Nickel", 100.0, 0.0, 20.0),
        ("Pb", "Lead", 10.0, 0.0, 10.0),
        ("Zn", "Zinc", 15000.0, 0.0, 15000.0),
    ];

    /// (symbol, display name, permissible, ideal), native units
    ///
    /// Quality parameters have no meaningful MAC; it is stored as 0 and the
    /// MAC-based indices never consult parameter entries.
    pub const QUALITY_PARAMETERS: &[(&str, &str, f64, f64)] = &[
        ("pH", "pH", 8.5, 7.0),
        ("EC", "Electrical Conductivity", 300.0, 0.0),
        ("TDS", "Total Dissolved Solids", 500.0, 0.0),
        ("TH", "Total Hardness", 300.0, 0.0),
        ("Ca", "Calcium", 75.0, 0.0),
        ("Mg", "Magnesium", 30.0, 0.0),
        ("Na", "Sodium", 200.0, 0.0),
        ("K", "Potassium", 12.0, 0.0),
        ("Cl", "Chloride", 250.0, 0.0),
        ("SO4", "Sulphate", 200.0, 0.0),
        ("NO3", "Nitrate", 45.0, 0.0),
        ("F", "Fluoride", 1.0, 0.0),
        ("Fe", "Iron", 0.3, 0.0),
        ("Turbidity", "Turbidity", 5.0, 0.0),
        ("Alkalinity", "Total Alkalinity", 200.0, 0.0),
    ];
}

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default timeout for the external standards fetch, in seconds.
///
/// This is the only blocking operation in a batch; it runs once per batch
/// and the result is cached in the standards snapshot.
pub const DEFAULT_STANDARDS_TIMEOUT_SECS: u64 = 10;

/// Prefix used when synthesizing a station identity from the row position
pub const SYNTHETIC_STATION_PREFIX: &str = "Station";
