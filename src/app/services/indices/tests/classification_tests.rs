//! Tests for classification band boundaries

use crate::app::models::IndexKind;
use crate::app::services::indices::classification::classify;

#[test]
fn test_hpi_boundaries_are_exclusive() {
    assert_eq!(classify(IndexKind::Hpi, 24.99), "Excellent - Negligible pollution");
    assert_eq!(classify(IndexKind::Hpi, 25.0), "Good - Low pollution");
    assert_eq!(classify(IndexKind::Hpi, 99.99), "Very Poor - High pollution");
    assert_eq!(classify(IndexKind::Hpi, 100.0), "Unsuitable - Critical pollution");
}

#[test]
fn test_wqi_boundaries_are_inclusive() {
    assert_eq!(classify(IndexKind::Wqi, 25.0), "Excellent");
    assert_eq!(classify(IndexKind::Wqi, 25.01), "Good");
    assert_eq!(classify(IndexKind::Wqi, 100.0), "Very Poor");
    assert_eq!(classify(IndexKind::Wqi, 100.01), "Unfit for Drinking");
}

#[test]
fn test_mi_class_ladder() {
    assert_eq!(classify(IndexKind::Mi, 0.1), "Class I - Very Pure");
    assert_eq!(classify(IndexKind::Mi, 0.3), "Class II - Pure");
    assert_eq!(classify(IndexKind::Mi, 1.5), "Class III - Slightly Affected");
    assert_eq!(classify(IndexKind::Mi, 3.9), "Class IV - Moderately Affected");
    assert_eq!(classify(IndexKind::Mi, 4.0), "Class V - Strongly Affected");
    assert_eq!(classify(IndexKind::Mi, 6.0), "Class VI - Seriously Affected");
}

#[test]
fn test_contamination_scales() {
    assert_eq!(classify(IndexKind::Cdeg, -2.0), "Low contamination");
    assert_eq!(classify(IndexKind::Cdeg, 1.0), "Medium contamination");
    assert_eq!(classify(IndexKind::Cdeg, 3.0), "High contamination");

    assert_eq!(classify(IndexKind::Hei, 9.99), "Low contamination");
    assert_eq!(classify(IndexKind::Hei, 10.0), "Medium contamination");
    assert_eq!(classify(IndexKind::Hei, 20.0), "High contamination");
}

#[test]
fn test_pig_bands() {
    assert_eq!(classify(IndexKind::Pig, 0.99), "Low pollution");
    assert_eq!(classify(IndexKind::Pig, 1.0), "Moderate pollution");
    assert_eq!(classify(IndexKind::Pig, 2.0), "High pollution");
    assert_eq!(classify(IndexKind::Pig, 5.0), "Very High pollution");
}
