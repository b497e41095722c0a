//! Unit hint parsing and conversion to the canonical metal unit (ppb)
//!
//! Survey headers often embed the measurement unit, e.g. "Pb (mg/L)" or
//! "Arsenic [ppb]". The hint is stripped before alias matching and parsed
//! into a multiplicative factor applied to that column's metal values.
//! Quality parameters are never converted; their standards are expressed in
//! the units labs report.

use crate::constants::units::FACTORS;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Trailing parenthesized or bracketed unit hint, e.g. "(mg/L)" or "[ppb]"
static UNIT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\(([^()]*)\)|\[([^\[\]]*)\])\s*$").expect("unit suffix pattern is valid")
});

/// Split a raw header into its name part and an optional unit hint.
///
/// Only a trailing `(...)` or `[...]` group is treated as a unit hint; the
/// hint is returned verbatim (trimmed) and the name part has the hint and
/// surrounding whitespace removed.
pub fn split_unit_suffix(header: &str) -> (String, Option<String>) {
    let trimmed = header.trim();
    if let Some(caps) = UNIT_SUFFIX.captures(trimmed) {
        let unit = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim().to_string())
            .filter(|u| !u.is_empty());
        let name = trimmed[..caps.get(0).map(|m| m.start()).unwrap_or(trimmed.len())]
            .trim()
            .to_string();
        // An empty name means the whole header was the "unit"; leave it alone
        if name.is_empty() {
            return (trimmed.to_string(), None);
        }
        return (name, unit);
    }
    (trimmed.to_string(), None)
}

/// Conversion factor to ppb for a recognized unit spelling.
///
/// Matching is case-insensitive and whitespace-insensitive. Unrecognized
/// units return `None`; callers default to no conversion.
pub fn multiplier_for_unit(unit: &str) -> Option<f64> {
    let normalized: String = unit
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    FACTORS
        .iter()
        .find(|(spelling, _)| *spelling == normalized)
        .map(|(_, factor)| *factor)
}

/// Resolve the multiplier for an optional unit hint, defaulting to 1.0.
pub fn resolve_multiplier(header: &str, unit: Option<&str>) -> f64 {
    match unit {
        Some(u) => multiplier_for_unit(u).unwrap_or_else(|| {
            debug!("Unrecognized unit hint '{}' in header '{}', no conversion", u, header);
            1.0
        }),
        None => 1.0,
    }
}
