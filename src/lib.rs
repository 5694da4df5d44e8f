//! apidoc-extract: API reference scraper
//!
//! This crate reads a static HTML API-reference document, segments it into the
//! operation sections of one tag, extracts a structured record per operation
//! and writes the catalogue out as JSON and as a typed TypeScript module.

pub mod config;
pub mod document;
pub mod extract;
pub mod model;
pub mod output;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for run-level failures
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("No operations found for tag '{tag}'")]
    NoOperations { tag: String },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Errors raised while parsing a single operation section
///
/// These never abort a run: the pipeline logs them and skips the section.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Duplicate {location} parameter '{name}'")]
    DuplicateParameter {
        location: model::ParameterLocation,
        name: String,
    },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for run-level operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for section parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use config::Config;
pub use document::{load_document, Document};
pub use extract::{extract_operations, parse_operation, segment, ExtractionReport, Section};
pub use model::{OperationRecord, Parameter, ParameterLocation, RequestBody, Response};
