//! Tests for the ingestion service

pub mod parser_tests;
pub mod row_parser_tests;
