use crate::config::Config;
use crate::extract::parser::OperationParser;
use crate::extract::segmenter::{segment, Section};
use crate::model::OperationRecord;
use crate::ExtractError;

/// A section that could not be parsed
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFailure {
    pub operation_id: String,
    pub message: String,
}

/// Outcome of one extraction run
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Tag the operations were extracted for
    pub tag: String,

    /// Sections produced by segmentation
    pub sections_found: usize,

    /// Successfully parsed operations, in document order
    pub operations: Vec<OperationRecord>,

    /// Sections skipped because parsing failed
    pub failures: Vec<SectionFailure>,
}

impl ExtractionReport {
    pub fn new(tag: impl Into<String>, sections_found: usize) -> Self {
        Self {
            tag: tag.into(),
            sections_found,
            ..Self::default()
        }
    }

    /// Folds one section's parse outcome into the report
    fn record(mut self, section: &Section, parser: &OperationParser) -> Self {
        match parser.parse(section) {
            Ok(operation) => {
                tracing::info!(
                    "  ✓ {} {} ({})",
                    operation.method.as_str().to_uppercase(),
                    operation.path,
                    operation.name
                );
                self.operations.push(operation);
            }
            Err(e) => {
                tracing::warn!("  ✗ Failed to extract {}: {}", section.operation_id, e);
                self.failures.push(SectionFailure {
                    operation_id: section.operation_id.clone(),
                    message: e.to_string(),
                });
            }
        }
        self
    }
}

/// Runs segmentation and per-section parsing over a document
///
/// # Arguments
///
/// * `html` - The full document text
/// * `config` - Tag and markers to extract with
///
/// # Returns
///
/// * `Ok(ExtractionReport)` - At least one operation was extracted
/// * `Err(ExtractError::NoOperations)` - No section matched the tag, or every
///   matching section failed to parse
/// * `Err(ExtractError::Parse)` - The configured selectors or markers do not compile
pub fn extract_operations(html: &str, config: &Config) -> Result<ExtractionReport, ExtractError> {
    let parser = OperationParser::new(&config.markers)?;

    let sections = segment(html, &config.tag, &config.markers);
    tracing::info!(
        "Found {} operation sections for tag {}",
        sections.len(),
        config.tag
    );

    if sections.is_empty() {
        return Err(ExtractError::NoOperations {
            tag: config.tag.clone(),
        });
    }

    let report = sections.iter().fold(
        ExtractionReport::new(&config.tag, sections.len()),
        |report, section| report.record(section, &parser),
    );

    if report.operations.is_empty() {
        return Err(ExtractError::NoOperations {
            tag: config.tag.clone(),
        });
    }

    Ok(report)
}
