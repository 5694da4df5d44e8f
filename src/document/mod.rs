//! Document loading
//!
//! Reads a static HTML API reference into memory as one string. The document
//! is assumed to be small enough to hold in full.

use crate::ExtractError;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A loaded API reference document
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the document was read from
    pub path: PathBuf,

    /// Full document text
    pub html: String,

    /// Hex-encoded SHA-256 of the document text
    pub sha256: String,
}

impl Document {
    /// Wraps already loaded text
    pub fn from_html(path: impl Into<PathBuf>, html: String) -> Self {
        let sha256 = compute_document_hash(&html);
        Self {
            path: path.into(),
            html,
            sha256,
        }
    }
}

/// Loads a document from disk
///
/// # Arguments
///
/// * `path` - Path to the HTML document
///
/// # Returns
///
/// * `Ok(Document)` - The full document text
/// * `Err(ExtractError::DocumentNotFound)` - Nothing exists at `path`
/// * `Err(ExtractError::Io)` - Any other read failure
pub fn load_document(path: &Path) -> Result<Document, ExtractError> {
    let html = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ExtractError::DocumentNotFound {
            path: path.to_path_buf(),
        },
        _ => ExtractError::Io(e),
    })?;

    tracing::debug!("Loaded {} bytes from {}", html.len(), path.display());

    Ok(Document::from_html(path, html))
}

/// Computes a SHA-256 hash of the document content
pub fn compute_document_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
