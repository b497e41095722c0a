//! Tests for tolerant row parsing

use crate::app::services::ingestion::column_mapping::ColumnMapping;
use crate::app::services::ingestion::row_parser::{lenient_parse_number, parse_row};
use csv::StringRecord;

fn mapping_for(headers: &[&str]) -> ColumnMapping {
    ColumnMapping::analyze(&StringRecord::from(headers.to_vec()))
}

fn record(cells: &[&str]) -> StringRecord {
    StringRecord::from(cells.to_vec())
}

#[test]
fn test_lenient_parse_plain_numbers() {
    assert_eq!(lenient_parse_number("42"), Some(42.0));
    assert_eq!(lenient_parse_number("0.048"), Some(0.048));
    assert_eq!(lenient_parse_number("-3.5"), Some(-3.5));
}

#[test]
fn test_lenient_parse_strips_garbage() {
    assert_eq!(lenient_parse_number("<0.05"), Some(0.05));
    assert_eq!(lenient_parse_number("1,250 ppb"), Some(1250.0));
    assert_eq!(lenient_parse_number("approx 12.5 mg"), Some(12.5));
}

#[test]
fn test_lenient_parse_absent_is_none_not_zero() {
    assert_eq!(lenient_parse_number(""), None);
    assert_eq!(lenient_parse_number("ND"), None);
    assert_eq!(lenient_parse_number("BDL"), None);
    assert_eq!(lenient_parse_number("-"), None);
    assert_eq!(lenient_parse_number("n/a"), None);
}

#[test]
fn test_parse_row_with_station_and_metals() {
    let mapping = mapping_for(&["Location", "As", "Pb (mg/L)"]);
    let row = parse_row(&record(&["Well 7", "0.048", "0.215"]), &mapping, 1).unwrap();

    assert_eq!(row.record.station, "Well 7");
    assert_eq!(row.record.metals["As"], 0.048);
    // mg/L values are converted to ppb
    assert_eq!(row.record.metals["Pb"], 215.0);
    assert!(row.warnings.is_empty());
}

#[test]
fn test_station_identity_synthesized_from_row_position() {
    let mapping = mapping_for(&["As"]);
    let row = parse_row(&record(&["0.5"]), &mapping, 3).unwrap();
    assert_eq!(row.record.station, "Station 3");
}

#[test]
fn test_parameters_pass_through_unconverted() {
    let mapping = mapping_for(&["pH", "TDS (mg/L)"]);
    let row = parse_row(&record(&["7.9", "67.22"]), &mapping, 1).unwrap();

    // No unit adjustment for quality parameters, even with a hint
    assert_eq!(row.record.parameters["pH"], 7.9);
    assert_eq!(row.record.parameters["TDS"], 67.22);
    assert!(row.record.metals.is_empty());
}

#[test]
fn test_unparseable_cell_is_absent() {
    let mapping = mapping_for(&["Location", "As", "Cd"]);
    let row = parse_row(&record(&["S1", "ND", "0.06"]), &mapping, 1).unwrap();

    assert!(!row.record.metals.contains_key("As"));
    assert_eq!(row.record.metals["Cd"], 0.06);
}

#[test]
fn test_negative_concentration_dropped_with_warning() {
    let mapping = mapping_for(&["As", "Cd"]);
    let row = parse_row(&record(&["-1.5", "0.06"]), &mapping, 4).unwrap();

    assert!(!row.record.metals.contains_key("As"));
    assert_eq!(row.warnings.len(), 1);
    assert!(row.warnings[0].contains("negative As"));
}

#[test]
fn test_row_with_zero_usable_values_is_rejected() {
    let mapping = mapping_for(&["Location", "As", "pH"]);
    let err = parse_row(&record(&["S1", "ND", ""]), &mapping, 2).unwrap_err();
    assert!(err.to_string().contains("Row 2"));
}

#[test]
fn test_metadata_fields_resolved_optionally() {
    let mapping = mapping_for(&["State", "District", "Latitude", "Longitude", "Year", "As"]);
    let row = parse_row(
        &record(&["Karnataka", "Mysuru", "12.30", "76.65", "2021", "5"]),
        &mapping,
        1,
    )
    .unwrap();

    assert_eq!(row.record.state.as_deref(), Some("Karnataka"));
    assert_eq!(row.record.district.as_deref(), Some("Mysuru"));
    assert_eq!(row.record.latitude, Some(12.30));
    assert_eq!(row.record.longitude, Some(76.65));
    assert_eq!(row.record.year.as_deref(), Some("2021"));
}
