//! JSON catalogue output

use crate::output::traits::{ApiCatalogue, ArtifactWriter, OutputResult};
use std::path::{Path, PathBuf};

/// Writes `{ tag, apis, total }` as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct JsonWriter {
    path: PathBuf,
}

impl JsonWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArtifactWriter for JsonWriter {
    fn kind(&self) -> &'static str {
        "JSON catalogue"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self, catalogue: &ApiCatalogue) -> OutputResult<String> {
        let mut json = serde_json::to_string_pretty(catalogue)?;
        json.push('\n');
        Ok(json)
    }
}
