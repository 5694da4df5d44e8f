//! Statistics for an extraction run
//!
//! This module summarizes an extraction report and prints the summary at the
//! end of a run.

use crate::extract::ExtractionReport;
use crate::model::HttpMethod;

/// Extraction statistics summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionStatistics {
    /// Sections produced by segmentation
    pub sections_found: usize,

    /// Operations extracted successfully
    pub operations: usize,

    /// Sections skipped after a parse failure
    pub failures: usize,

    /// Operation count per method, in method order, zero counts omitted
    pub by_method: Vec<(HttpMethod, usize)>,

    /// Query, path and header parameters across all operations
    pub total_parameters: usize,

    /// Operations with a request body
    pub with_request_body: usize,

    /// Operations requiring authorization
    pub authorized: usize,

    /// Operations whose path could not be detected
    pub missing_paths: usize,
}

/// Computes statistics from an extraction report
pub fn compute_statistics(report: &ExtractionReport) -> ExtractionStatistics {
    let operations = &report.operations;

    let by_method = HttpMethod::all_methods()
        .into_iter()
        .map(|method| {
            let count = operations.iter().filter(|op| op.method == method).count();
            (method, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    ExtractionStatistics {
        sections_found: report.sections_found,
        operations: operations.len(),
        failures: report.failures.len(),
        by_method,
        total_parameters: operations.iter().map(|op| op.parameter_count()).sum(),
        with_request_body: operations
            .iter()
            .filter(|op| op.request_body.is_some())
            .count(),
        authorized: operations
            .iter()
            .filter(|op| op.authorization.is_some())
            .count(),
        missing_paths: operations.iter().filter(|op| op.path.is_empty()).count(),
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &ExtractionStatistics) {
    println!("=== Extraction Statistics ===\n");

    println!("Overview:");
    println!("  Sections found: {}", stats.sections_found);
    println!("  Operations extracted: {}", stats.operations);
    println!("  Sections skipped: {}", stats.failures);
    println!();

    println!("Operations by Method:");
    for (method, count) in &stats.by_method {
        let percentage = if stats.operations > 0 {
            (*count as f64 / stats.operations as f64) * 100.0
        } else {
            0.0
        };
        println!(
            "  {}: {} ({:.1}%)",
            method.as_str().to_uppercase(),
            count,
            percentage
        );
    }
    println!();

    println!("Details:");
    println!("  Parameters: {}", stats.total_parameters);
    println!("  With request body: {}", stats.with_request_body);
    println!("  Requiring authorization: {}", stats.authorized);
    if stats.missing_paths > 0 {
        println!("  Without detected path: {}", stats.missing_paths);
    }
}
