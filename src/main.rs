//! apidoc-extract main entry point
//!
//! This is the command-line interface for the API reference extractor.

use anyhow::Context;
use apidoc_extract::config::{resolve_config, Config};
use apidoc_extract::extract::{extract_operations, ExtractionReport};
use apidoc_extract::load_document;
use apidoc_extract::output::{compute_statistics, print_statistics, write_artifacts, SourceInfo};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// apidoc-extract: API reference extractor
///
/// Reads an HTML API reference, extracts every operation of one tag and
/// writes the result as a JSON catalogue and a typed TypeScript module.
/// With no arguments it reads docs/api.html and extracts the Agent tag.
#[derive(Parser, Debug)]
#[command(name = "apidoc-extract")]
#[command(version = "1.0.0")]
#[command(about = "Extracts API operations from an HTML reference", long_about = None)]
struct Cli {
    /// Project root that configured paths are relative to
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tag to extract, overriding the configuration
    #[arg(short, long)]
    tag: Option<String>,

    /// Extract and list operations without writing any output
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout only carries the statistics and listings.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("apidoc_extract=info,warn"),
            1 => EnvFilter::new("apidoc_extract=debug,info"),
            2 => EnvFilter::new("apidoc_extract=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs one extraction: load, segment, parse, write
fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref(), cli.tag.as_deref())
        .context("Failed to load configuration")?;

    let input = cli.root.join(&config.paths.input);
    tracing::info!("Reading API reference from: {}", input.display());
    let document = load_document(&input)?;
    tracing::debug!("Document sha256: {}", document.sha256);

    let report = extract_operations(&document.html, &config)?;
    if !report.failures.is_empty() {
        tracing::warn!(
            "{} of {} sections could not be extracted",
            report.failures.len(),
            report.sections_found
        );
    }

    if cli.dry_run {
        handle_dry_run(&config, &report);
        return Ok(());
    }

    handle_write(&cli.root, &config, &report, document.sha256)?;
    print_statistics(&compute_statistics(&report));

    Ok(())
}

/// Handles the --dry-run mode: lists what would be written
fn handle_dry_run(config: &Config, report: &ExtractionReport) {
    println!("=== apidoc-extract Dry Run ===\n");

    println!("Tag: {}", config.tag);
    println!("Input: {}", config.paths.input);
    println!("JSON output: {}", config.paths.json_output);
    println!("Module output: {}", config.paths.module_output);

    println!("\nOperations ({}):", report.operations.len());
    for op in &report.operations {
        println!(
            "  - {} {} ({})",
            op.method.as_str().to_uppercase(),
            op.path,
            op.id
        );
    }

    if !report.failures.is_empty() {
        println!("\nSkipped sections ({}):", report.failures.len());
        for failure in &report.failures {
            println!("  - {}: {}", failure.operation_id, failure.message);
        }
    }

    println!(
        "\n✓ Would write {} operations",
        report.operations.len()
    );
}

/// Writes the JSON catalogue and the TypeScript module
fn handle_write(
    root: &Path,
    config: &Config,
    report: &ExtractionReport,
    sha256: String,
) -> anyhow::Result<()> {
    let json_path = root.join(&config.paths.json_output);
    let module_path = root.join(&config.paths.module_output);

    let source = SourceInfo {
        path: config.paths.input.clone(),
        sha256,
    };

    let catalogue = write_artifacts(report, &json_path, &module_path, source)
        .context("Failed to write output")?;

    tracing::info!(
        "Extracted {} {} operations",
        catalogue.total,
        catalogue.tag
    );

    Ok(())
}
