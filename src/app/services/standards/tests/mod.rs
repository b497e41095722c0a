//! Tests for standards resolution

pub mod resolver_tests;
pub mod snapshot_tests;
