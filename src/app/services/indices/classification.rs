//! Ordered classification threshold tables
//!
//! Each index carries an ordered band table: the first band whose upper
//! boundary the value falls under wins, with a catch-all label above the
//! last boundary. WQI uses inclusive upper boundaries; every other index
//! uses exclusive ones.

use crate::app::models::IndexKind;

/// HPI bands (exclusive upper boundaries)
const HPI_BANDS: &[(f64, &str)] = &[
    (25.0, "Excellent - Negligible pollution"),
    (50.0, "Good - Low pollution"),
    (75.0, "Poor - Moderate pollution"),
    (100.0, "Very Poor - High pollution"),
];
const HPI_ABOVE: &str = "Unsuitable - Critical pollution";

/// MI bands, Class I-VI (exclusive upper boundaries)
const MI_BANDS: &[(f64, &str)] = &[
    (0.3, "Class I - Very Pure"),
    (1.0, "Class II - Pure"),
    (2.0, "Class III - Slightly Affected"),
    (4.0, "Class IV - Moderately Affected"),
    (6.0, "Class V - Strongly Affected"),
];
const MI_ABOVE: &str = "Class VI - Seriously Affected";

/// WQI bands (inclusive upper boundaries)
const WQI_BANDS: &[(f64, &str)] = &[
    (25.0, "Excellent"),
    (50.0, "Good"),
    (75.0, "Poor"),
    (100.0, "Very Poor"),
];
const WQI_ABOVE: &str = "Unfit for Drinking";

/// CDEG bands (exclusive upper boundaries)
const CDEG_BANDS: &[(f64, &str)] = &[
    (1.0, "Low contamination"),
    (3.0, "Medium contamination"),
];
const CDEG_ABOVE: &str = "High contamination";

/// HEI bands (exclusive upper boundaries)
const HEI_BANDS: &[(f64, &str)] = &[
    (10.0, "Low contamination"),
    (20.0, "Medium contamination"),
];
const HEI_ABOVE: &str = "High contamination";

/// PIG bands (exclusive upper boundaries)
const PIG_BANDS: &[(f64, &str)] = &[
    (1.0, "Low pollution"),
    (2.0, "Moderate pollution"),
    (5.0, "High pollution"),
];
const PIG_ABOVE: &str = "Very High pollution";

/// Classification label for a computed index value
pub fn classify(index: IndexKind, value: f64) -> &'static str {
    match index {
        IndexKind::Hpi => first_band_below(HPI_BANDS, HPI_ABOVE, value),
        IndexKind::Mi => first_band_below(MI_BANDS, MI_ABOVE, value),
        IndexKind::Wqi => first_band_at_or_below(WQI_BANDS, WQI_ABOVE, value),
        IndexKind::Cdeg => first_band_below(CDEG_BANDS, CDEG_ABOVE, value),
        IndexKind::Hei => first_band_below(HEI_BANDS, HEI_ABOVE, value),
        IndexKind::Pig => first_band_below(PIG_BANDS, PIG_ABOVE, value),
    }
}

fn first_band_below(bands: &[(f64, &'static str)], above: &'static str, value: f64) -> &'static str {
    bands
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, label)| *label)
        .unwrap_or(above)
}

fn first_band_at_or_below(
    bands: &[(f64, &'static str)],
    above: &'static str,
    value: f64,
) -> &'static str {
    bands
        .iter()
        .find(|(upper, _)| value <= *upper)
        .map(|(_, label)| *label)
        .unwrap_or(above)
}
