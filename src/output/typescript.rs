//! TypeScript module generation
//!
//! This module renders the catalogue as a typed TypeScript module so static
//! consumers can import it without parsing HTML at runtime.

use crate::model::HttpMethod;
use crate::output::traits::{ApiCatalogue, ArtifactWriter, OutputResult, SourceInfo};
use std::path::{Path, PathBuf};

/// Writes the catalogue as a TypeScript module
#[derive(Debug, Clone)]
pub struct TypeScriptWriter {
    path: PathBuf,
    source: Option<SourceInfo>,
}

impl TypeScriptWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: None,
        }
    }

    /// Names the source document in the generated header
    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = Some(source);
        self
    }
}

impl ArtifactWriter for TypeScriptWriter {
    fn kind(&self) -> &'static str {
        "TypeScript module"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self, catalogue: &ApiCatalogue) -> OutputResult<String> {
        format_typescript_module(catalogue, self.source.as_ref())
    }
}

/// Formats a catalogue as a TypeScript module
///
/// # Arguments
///
/// * `catalogue` - The extracted catalogue
/// * `source` - Source document named in the header, if known
///
/// # Returns
///
/// The module text: type declarations, the operations constant and the count constant
pub fn format_typescript_module(
    catalogue: &ApiCatalogue,
    source: Option<&SourceInfo>,
) -> OutputResult<String> {
    let constant = constant_name(&catalogue.tag);
    let mut ts = String::new();

    // Header
    match source {
        Some(source) => {
            ts.push_str(&format!(
                "// Generated by apidoc-extract from {}\n",
                source.path
            ));
            ts.push_str(&format!("// Source sha256: {}\n", source.sha256));
        }
        None => ts.push_str("// Generated by apidoc-extract\n"),
    }
    ts.push_str("// Do not edit by hand; rerun the extractor instead.\n\n");

    // Type declarations
    ts.push_str("export interface Parameter {\n");
    ts.push_str("  name: string;\n");
    ts.push_str("  type: string;\n");
    ts.push_str("  required: boolean;\n");
    ts.push_str("  description: string;\n");
    ts.push_str("  default?: string;\n");
    ts.push_str("}\n\n");

    ts.push_str("export interface RequestBody {\n");
    ts.push_str("  contentType: string;\n");
    ts.push_str("  required: boolean;\n");
    ts.push_str("  properties: Parameter[];\n");
    ts.push_str("}\n\n");

    ts.push_str("export interface Response {\n");
    ts.push_str("  statusCode: number;\n");
    ts.push_str("  description: string;\n");
    ts.push_str("}\n\n");

    let methods = HttpMethod::all_methods()
        .iter()
        .map(|method| format!("'{}'", method))
        .collect::<Vec<_>>()
        .join(" | ");

    ts.push_str("export interface OperationRecord {\n");
    ts.push_str("  id: string;\n");
    ts.push_str("  name: string;\n");
    ts.push_str("  description: string;\n");
    ts.push_str(&format!("  method: {};\n", methods));
    ts.push_str("  path: string;\n");
    ts.push_str("  parameters: {\n");
    ts.push_str("    query: Parameter[];\n");
    ts.push_str("    path: Parameter[];\n");
    ts.push_str("    header: Parameter[];\n");
    ts.push_str("  };\n");
    ts.push_str("  requestBody?: RequestBody;\n");
    ts.push_str("  responses: Response[];\n");
    ts.push_str("  authorization?: string;\n");
    ts.push_str("}\n\n");

    // Data
    let apis = serde_json::to_string_pretty(&catalogue.apis)?;
    ts.push_str(&format!(
        "export const {}: OperationRecord[] = {};\n\n",
        constant, apis
    ));
    ts.push_str(&format!(
        "export const {}_COUNT = {};\n",
        constant, catalogue.total
    ));

    Ok(ts)
}

/// Derives the exported constant name from a tag
///
/// `Agent` becomes `AGENT_APIS`, `AgentTask` and `agent-task` both become
/// `AGENT_TASK_APIS`.
pub fn constant_name(tag: &str) -> String {
    let mut name = String::new();
    let mut prev: Option<char> = None;

    for c in tag.chars() {
        if c.is_ascii_alphanumeric() {
            if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
                name.push('_');
            }
            name.push(c.to_ascii_uppercase());
        } else if !name.is_empty() && !name.ends_with('_') {
            name.push('_');
        }
        prev = Some(c);
    }

    let name = name.trim_end_matches('_');
    let mut constant = if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name.to_string()
    };

    if !constant.is_empty() {
        constant.push('_');
    }
    constant.push_str("APIS");
    constant
}
