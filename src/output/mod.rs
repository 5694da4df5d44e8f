//! Output module for writing extracted catalogues
//!
//! This module handles:
//! - Writing the catalogue as a JSON document
//! - Generating a typed TypeScript module with the same data
//! - Summarizing a run as statistics

mod json;
pub mod stats;
mod traits;
mod typescript;

pub use json::JsonWriter;
pub use stats::{compute_statistics, print_statistics, ExtractionStatistics};
pub use traits::{ApiCatalogue, ArtifactWriter, OutputError, OutputResult, SourceInfo};
pub use typescript::{constant_name, format_typescript_module, TypeScriptWriter};

use crate::extract::ExtractionReport;
use std::path::Path;

/// Writes both artifacts for an extraction report
///
/// Both artifacts are rendered from the same catalogue, so they always
/// describe the same record set. Existing files are replaced.
///
/// # Arguments
///
/// * `report` - The extraction outcome
/// * `json_path` - Destination of the JSON catalogue
/// * `module_path` - Destination of the TypeScript module
/// * `source` - Source document named in the module header
///
/// # Returns
///
/// * `Ok(ApiCatalogue)` - The catalogue that was written
/// * `Err(OutputError)` - Failed to render or write an artifact
pub fn write_artifacts(
    report: &ExtractionReport,
    json_path: &Path,
    module_path: &Path,
    source: SourceInfo,
) -> OutputResult<ApiCatalogue> {
    let catalogue = ApiCatalogue::from(report);

    let writers: Vec<Box<dyn ArtifactWriter>> = vec![
        Box::new(JsonWriter::new(json_path)),
        Box::new(TypeScriptWriter::new(module_path).with_source(source)),
    ];

    for writer in &writers {
        writer.write(&catalogue)?;
    }

    Ok(catalogue)
}
