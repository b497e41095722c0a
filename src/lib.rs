//! Hydroindex Library
//!
//! A Rust library for computing heavy-metal pollution and water-quality
//! indices from heterogeneous groundwater survey tables.
//!
//! This library provides tools for:
//! - Mapping arbitrarily named CSV headers onto canonical survey fields
//! - Normalizing embedded unit hints (mg/L, ppm, µg/L) to ppb
//! - Resolving reference standards through a three-tier fallback chain
//! - Computing six indices (HPI, MI, WQI, CDEG, HEI, PIG) with per-station
//!   classification and auditable per-symbol breakdowns
//! - Batch orchestration with per-row error isolation and summary statistics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod batch;
        pub mod indices;
        pub mod ingestion;
        pub mod standards;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    BatchSummary, CalculationResult, IndexKind, ParsedRecord, StandardDefinition,
    StationResultBundle,
};
pub use config::ProcessingConfig;

/// Result type alias for hydroindex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for survey ingestion and index calculation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Survey table structure error (missing header, no data rows)
    #[error("Survey format error in '{file}': {message}")]
    SurveyFormat { file: String, message: String },

    /// Standards document error (unreadable or malformed standards source)
    #[error("Standards source error: {message}")]
    StandardsSource { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Result persistence error
    #[error("Persistence error: {message}")]
    Persistence {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a survey format error
    pub fn survey_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SurveyFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a standards source error
    pub fn standards_source(message: impl Into<String>) -> Self {
        Self::StandardsSource {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a persistence error
    pub fn persistence(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
