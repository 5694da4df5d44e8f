//! Artifact writer traits and types
//!
//! This module defines the trait interface shared by the JSON and TypeScript
//! writers, and the catalogue both of them serialize.

use crate::extract::ExtractionReport;
use crate::model::OperationRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize catalogue: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// The extracted catalogue, as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCatalogue {
    pub tag: String,
    pub apis: Vec<OperationRecord>,
    pub total: usize,
}

impl ApiCatalogue {
    pub fn new(tag: impl Into<String>, apis: Vec<OperationRecord>) -> Self {
        let total = apis.len();
        Self {
            tag: tag.into(),
            apis,
            total,
        }
    }
}

impl From<&ExtractionReport> for ApiCatalogue {
    fn from(report: &ExtractionReport) -> Self {
        Self::new(report.tag.clone(), report.operations.clone())
    }
}

/// Where the catalogue was extracted from, for generated headers
#[derive(Debug, Clone, PartialEq)]
pub struct SourceInfo {
    /// Document path as configured, relative to the project root
    pub path: String,

    /// Hex-encoded SHA-256 of the document
    pub sha256: String,
}

/// Trait for artifact writers
///
/// A writer renders the whole catalogue to a string and replaces its
/// destination file. Rendering must be deterministic so unchanged input
/// produces byte-identical output.
pub trait ArtifactWriter {
    /// Short artifact name for logs
    fn kind(&self) -> &'static str;

    /// Destination file
    fn path(&self) -> &Path;

    /// Renders the catalogue to the artifact's text form
    fn render(&self, catalogue: &ApiCatalogue) -> OutputResult<String>;

    /// Renders and writes the artifact, creating parent directories as needed
    fn write(&self, catalogue: &ApiCatalogue) -> OutputResult<()> {
        let content = self.render(catalogue)?;
        let path = self.path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| OutputError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, content).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Wrote {} to {}", self.kind(), path.display());
        Ok(())
    }
}
