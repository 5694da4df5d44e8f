//! Integration tests for the extractor
//!
//! These tests run the full pipeline on a Redoc-style fixture, both through
//! the library and through the compiled binary against a temporary project root.

use apidoc_extract::config::Config;
use apidoc_extract::extract::extract_operations;
use apidoc_extract::model::HttpMethod;
use apidoc_extract::output::{write_artifacts, ApiCatalogue, SourceInfo};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const FIXTURE: &str = include_str!("../fixtures/agent_api.html");

/// Creates a project root with the fixture at docs/api.html
fn create_project(html: &str) -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    let docs = root.path().join("docs");
    std::fs::create_dir_all(&docs).expect("Failed to create docs dir");
    std::fs::write(docs.join("api.html"), html).expect("Failed to write fixture");
    root
}

fn run_extractor(root: &Path, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_apidoc-extract"))
        .arg("--root")
        .arg(root)
        .args(extra_args)
        .output()
        .expect("Failed to run apidoc-extract")
}

fn read_json(root: &Path) -> Value {
    let content = std::fs::read_to_string(root.join("api/data/agent-apis.json"))
        .expect("JSON output missing");
    serde_json::from_str(&content).expect("JSON output is not valid JSON")
}

fn find_api<'a>(json: &'a Value, id: &str) -> &'a Value {
    json["apis"]
        .as_array()
        .expect("apis is not an array")
        .iter()
        .find(|api| api["id"] == id)
        .unwrap_or_else(|| panic!("operation {} missing", id))
}

#[test]
fn test_archive_agent_end_to_end() {
    let html = r##"
<html><body>
<div id="tag/Agent/operation/archive_agent">
  <h2><a href="#tag/Agent/operation/archive_agent"></a>Archive Agent</h2>
  <h5>path Parameters</h5>
  <table><tbody>
    <tr>
      <td kind="field" title="agent_id"><span class="property-name">agent_id</span><div>required</div></td>
      <td><span class="property-type">string</span></td>
    </tr>
  </tbody></table>
  <h3>Responses</h3>
  <div class="response"><strong>200</strong><div class="redoc-markdown"><p>Success</p></div></div>
  <div class="endpoint"><span type="delete" class="http-verb delete">DELETE</span><span class="endpoint-path">/agents/{agent_id}/archive</span></div>
</div>
</body></html>
"##;
    let root = create_project(html);
    let output = run_extractor(root.path(), &[]);
    assert!(output.status.success(), "extractor failed: {:?}", output);

    let json = read_json(root.path());
    assert_eq!(json["tag"], "Agent");
    assert_eq!(json["total"], 1);

    let apis = json["apis"].as_array().unwrap();
    assert_eq!(apis.len(), 1);
    assert_eq!(apis[0]["id"], "archive_agent");
    assert_eq!(apis[0]["name"], "Archive Agent");
    assert_eq!(apis[0]["method"], "delete");
    assert_eq!(apis[0]["path"], "/agents/{agent_id}/archive");
    assert_eq!(apis[0]["parameters"]["path"][0]["name"], "agent_id");
    assert_eq!(apis[0]["parameters"]["path"][0]["required"], true);
    assert_eq!(apis[0]["parameters"]["path"][0]["type"], "string");
    assert_eq!(apis[0]["responses"][0]["statusCode"], 200);
    assert_eq!(apis[0]["responses"][0]["description"], "Success");

    let module = std::fs::read_to_string(root.path().join("api/agent-apis.ts")).unwrap();
    assert!(module.contains("export const AGENT_APIS: OperationRecord[] = ["));
    assert!(module.contains("export const AGENT_APIS_COUNT = 1;"));
}

#[test]
fn test_fixture_extraction() {
    let root = create_project(FIXTURE);
    let output = run_extractor(root.path(), &[]);
    assert!(output.status.success(), "extractor failed: {:?}", output);

    let json = read_json(root.path());
    let ids: Vec<&str> = json["apis"]
        .as_array()
        .unwrap()
        .iter()
        .map(|api| api["id"].as_str().unwrap())
        .collect();

    // Document order, Payment operations excluded, broken section skipped
    assert_eq!(
        ids,
        vec![
            "list_agents",
            "create_agent",
            "update_agent_budget",
            "archive_agent"
        ]
    );
    assert_eq!(json["total"], 4);

    let list = find_api(&json, "list_agents");
    assert_eq!(list["name"], "List Agents");
    assert_eq!(list["description"], "Returns the agents owned by the caller.");
    assert_eq!(list["method"], "get");
    assert_eq!(list["path"], "/agents");
    assert_eq!(list["authorization"], "bearer");
    assert_eq!(list["parameters"]["query"][1]["default"], "20");
    assert_eq!(list["responses"][1]["statusCode"], 422);

    let create = find_api(&json, "create_agent");
    assert_eq!(create["requestBody"]["contentType"], "application/json");
    assert_eq!(create["requestBody"]["required"], true);
    assert_eq!(create["requestBody"]["properties"][0]["name"], "name");
    assert_eq!(create["requestBody"]["properties"][0]["required"], true);
    assert_eq!(create["requestBody"]["properties"][1]["type"], "string");
    assert_eq!(create["requestBody"]["properties"][1]["required"], false);
}

#[test]
fn test_output_is_idempotent() {
    let root = create_project(FIXTURE);

    assert!(run_extractor(root.path(), &[]).status.success());
    let json_first = std::fs::read(root.path().join("api/data/agent-apis.json")).unwrap();
    let module_first = std::fs::read(root.path().join("api/agent-apis.ts")).unwrap();

    assert!(run_extractor(root.path(), &[]).status.success());
    let json_second = std::fs::read(root.path().join("api/data/agent-apis.json")).unwrap();
    let module_second = std::fs::read(root.path().join("api/agent-apis.ts")).unwrap();

    assert_eq!(json_first, json_second);
    assert_eq!(module_first, module_second);
}

#[test]
fn test_ids_are_unique() {
    // Same operation documented twice
    let html = FIXTURE.replacen(
        r#"<div id="tag/Payment" data-section-id="tag/Payment">"#,
        r#"<div id="tag/Agent/operation/list_agents"><h2>Duplicate</h2></div><div id="tag/Payment" data-section-id="tag/Payment">"#,
        1,
    );
    let report = extract_operations(&html, &Config::default()).unwrap();

    let mut seen = HashSet::new();
    for op in &report.operations {
        assert!(seen.insert(op.id.clone()), "duplicate id {}", op.id);
    }
    let list = report
        .operations
        .iter()
        .find(|op| op.id == "list_agents")
        .unwrap();
    assert_eq!(list.name, "List Agents");
}

#[test]
fn test_parameter_groups_always_present() {
    let root = create_project(FIXTURE);
    assert!(run_extractor(root.path(), &[]).status.success());

    let json = read_json(root.path());
    for api in json["apis"].as_array().unwrap() {
        for group in ["query", "path", "header"] {
            assert!(
                api["parameters"][group].is_array(),
                "{} missing {} group",
                api["id"],
                group
            );
        }
    }
}

#[test]
fn test_name_falls_back_to_operation_id() {
    let report = extract_operations(FIXTURE, &Config::default()).unwrap();
    let op = report
        .operations
        .iter()
        .find(|op| op.id == "update_agent_budget")
        .unwrap();

    assert_eq!(op.name, "Update Agent Budget");
}

#[test]
fn test_uppercase_verb_normalized() {
    let report = extract_operations(FIXTURE, &Config::default()).unwrap();
    let op = report
        .operations
        .iter()
        .find(|op| op.id == "update_agent_budget")
        .unwrap();

    assert_eq!(op.method, HttpMethod::Put);
    assert_eq!(op.path, "/agents/{agent_id}/budget");
}

#[test]
fn test_parameter_types_normalized() {
    let report = extract_operations(FIXTURE, &Config::default()).unwrap();
    let list = &report.operations[0];

    assert_eq!(list.parameters.query[0].name, "status");
    assert_eq!(list.parameters.query[0].param_type, "string");
    assert_eq!(list.parameters.query[1].name, "limit");
    assert_eq!(list.parameters.query[1].param_type, "number");
}

#[test]
fn test_request_body_without_properties_collapses() {
    let root = create_project(FIXTURE);
    assert!(run_extractor(root.path(), &[]).status.success());

    let json = read_json(root.path());
    let op = find_api(&json, "update_agent_budget");
    assert!(op.get("requestBody").is_none());
    assert_eq!(op["parameters"]["path"][0]["name"], "agent_id");
}

#[test]
fn test_failing_section_is_excluded() {
    let report = extract_operations(FIXTURE, &Config::default()).unwrap();

    assert_eq!(report.sections_found, 5);
    assert_eq!(report.operations.len(), 4);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].operation_id, "broken_agent_search");
    assert!(report
        .operations
        .iter()
        .all(|op| op.id != "broken_agent_search"));
}

#[test]
fn test_fallback_segmentation_matches_primary() {
    let primary = extract_operations(FIXTURE, &Config::default()).unwrap();

    // Drop the container ids so only the section markers remain
    let html = FIXTURE.replace(r#" id="tag/"#, r#" data-anchor="tag/"#);
    let fallback = extract_operations(&html, &Config::default()).unwrap();

    assert_eq!(fallback.sections_found, primary.sections_found);
    assert_eq!(fallback.operations, primary.operations);
}

#[test]
fn test_missing_document_exits_with_error() {
    let root = TempDir::new().unwrap();
    let output = run_extractor(root.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API document not found"), "stderr: {}", stderr);
    assert!(!root.path().join("api").exists());
}

#[test]
fn test_no_operations_exits_with_error() {
    let root = create_project(FIXTURE);
    let output = run_extractor(root.path(), &["--tag", "Merchant"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Merchant"), "stderr: {}", stderr);
    assert!(!root.path().join("api").exists());
}

#[test]
fn test_config_file_retargets_extraction() {
    let root = create_project(FIXTURE);
    let config_path = root.path().join("extract.toml");
    std::fs::write(
        &config_path,
        r#"
tag = "Payment"

[paths]
json-output = "generated/payment-apis.json"
module-output = "generated/payment-apis.ts"
"#,
    )
    .unwrap();

    let output = run_extractor(root.path(), &["--config", config_path.to_str().unwrap()]);
    assert!(output.status.success(), "extractor failed: {:?}", output);

    let content =
        std::fs::read_to_string(root.path().join("generated/payment-apis.json")).unwrap();
    let catalogue: ApiCatalogue = serde_json::from_str(&content).unwrap();
    assert_eq!(catalogue.tag, "Payment");
    assert_eq!(catalogue.total, 1);
    assert_eq!(catalogue.apis[0].path, "/payments");

    let module = std::fs::read_to_string(root.path().join("generated/payment-apis.ts")).unwrap();
    assert!(module.contains("export const PAYMENT_APIS_COUNT = 1;"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let root = create_project(FIXTURE);
    let output = run_extractor(root.path(), &["--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DELETE /agents/{agent_id}/archive (archive_agent)"));
    assert!(stdout.contains("broken_agent_search"));
    assert!(!root.path().join("api").exists());
}

#[test]
fn test_artifacts_describe_same_records() {
    let report = extract_operations(FIXTURE, &Config::default()).unwrap();
    let out = TempDir::new().unwrap();
    let json_path = out.path().join("apis.json");
    let module_path = out.path().join("ts/apis.ts");

    let catalogue = write_artifacts(
        &report,
        &json_path,
        &module_path,
        SourceInfo {
            path: "docs/api.html".to_string(),
            sha256: "0".repeat(64),
        },
    )
    .unwrap();

    let from_json: ApiCatalogue =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(from_json, catalogue);

    let module = std::fs::read_to_string(&module_path).unwrap();
    let apis_json = serde_json::to_string_pretty(&catalogue.apis).unwrap();
    assert!(module.contains(&apis_json));
}
