//! Extraction module for API reference documents
//!
//! This module contains the core extraction logic, including:
//! - Segmenting a document into per-operation sections
//! - Locating group headings inside a section
//! - Detecting the HTTP method and URL template
//! - Parsing parameter tables, request bodies and responses
//! - Folding per-section results into one report

mod endpoint;
mod layout;
mod parser;
mod pipeline;
mod rows;
mod segmenter;
mod selectors;
mod text;

pub use endpoint::VerbStrategy;
pub use parser::{parse_operation, OperationParser};
pub use pipeline::{extract_operations, ExtractionReport, SectionFailure};
pub use rows::normalize_type;
pub use segmenter::{segment, Section};
