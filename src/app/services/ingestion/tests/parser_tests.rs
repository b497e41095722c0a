//! Tests for whole-table ingestion

use crate::Error;
use crate::app::services::ingestion::parser::parse_str;

#[test]
fn test_parse_simple_table() {
    let csv = "\
Location,As,Pb,pH
Well 1,0.048,0.215,7.9
Well 2,0.1,0.3,8.1
";
    let result = parse_str(csv, "test.csv").unwrap();

    assert_eq!(result.total_rows, 2);
    assert_eq!(result.rows.len(), 2);
    assert!(result.row_errors.is_empty());
    assert_eq!(result.rows[0].record.station, "Well 1");
    assert_eq!(result.rows[1].record.row_number, 2);
}

#[test]
fn test_header_only_table_is_a_parse_failure() {
    let err = parse_str("Location,As,Pb\n", "empty.csv").unwrap_err();
    assert!(matches!(err, Error::SurveyFormat { .. }));
    assert!(err.to_string().contains("no data rows"));
}

#[test]
fn test_bad_rows_are_isolated_not_fatal() {
    let csv = "\
Location,As,Cd
Well 1,0.5,0.06
Well 2,ND,n/a
Well 3,1.2,0.1
";
    let result = parse_str(csv, "test.csv").unwrap();

    // Row 2 resolves no values at all and is rejected on its own
    assert_eq!(result.total_rows, 3);
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.row_errors.len(), 1);
    assert!(result.row_errors[0].contains("Row 2"));
    assert_eq!(result.rows[1].record.station, "Well 3");
}

#[test]
fn test_blank_rows_are_skipped_silently() {
    let csv = "\
Location,As
Well 1,0.5
,
Well 2,0.7
";
    let result = parse_str(csv, "test.csv").unwrap();
    assert_eq!(result.total_rows, 2);
    assert_eq!(result.rows.len(), 2);
    assert!(result.row_errors.is_empty());
}

#[test]
fn test_row_to_result_correspondence_is_preserved() {
    let csv = "\
Location,As
A,1
B,x
C,3
";
    let result = parse_str(csv, "test.csv").unwrap();

    // Row numbers track source positions even with a rejected row between
    let numbers: Vec<usize> = result.rows.iter().map(|r| r.record.row_number).collect();
    assert_eq!(numbers, vec![1, 3]);
}
