//! End-to-end workflow tests for llm-setup-core against a real directory.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use llm_setup_adapters::{LocalFilesystem, MemorySink};
use llm_setup_core::prelude::*;

const DEMO: &str = r#"{
  "name": "demo",
  "type": "api",
  "technologies": ["python", "fastapi"],
  "base_structure": "standard"
}"#;

fn demo_config(root: &Path) -> ProjectConfig {
    ConfigDocument::from_json(DEMO)
        .unwrap()
        .into_config(root)
        .unwrap()
}

fn scaffold(root: &Path) -> (ScaffoldSummary, MemorySink) {
    let sink = MemorySink::new();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Arc::new(sink.clone()));
    let summary = service.run(&demo_config(root)).unwrap();
    (summary, sink)
}

#[test]
fn scaffold_then_validate_passes_every_check() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("demo");

    let (summary, _) = scaffold(&root);
    assert_eq!(summary.directories, 9);
    assert_eq!(summary.files, 9);

    let report = ValidationService::new(Box::new(LocalFilesystem::new())).validate(&root);
    assert!(report.all_passed(), "{report:?}");
    assert_eq!(report.checks.len(), 3);
}

#[test]
fn scaffold_writes_the_documented_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    scaffold(root);

    for dir in [
        "docs/adr",
        "docs/methodology",
        "docs/analysis",
        "docs/guides",
        "src",
        "tests/unit",
        "tests/integration",
        "tools",
        "examples",
    ] {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }
    for file in [
        "docs/methodology/README.md",
        "docs/methodology/llm_methodology.md",
        "docs/methodology/tools_integration.md",
        "docs/methodology/tavily_integration.md",
        "docs/methodology/project_initialization.md",
        "docs/methodology/resume_prompt.md",
        "docs/methodology/context.yaml",
        "tools_config.json",
        ".gitignore",
    ] {
        assert!(root.join(file).is_file(), "missing file {file}");
    }

    let readme = fs::read_to_string(root.join("docs/methodology/README.md")).unwrap();
    assert!(readme.contains("# demo"));
    assert!(readme.contains("python, fastapi"));
}

#[test]
fn rerun_is_idempotent_and_preserves_unmanaged_files() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/existing.md"), "keep me").unwrap();

    scaffold(root);
    let first = fs::read_to_string(root.join("tools_config.json")).unwrap();
    scaffold(root);
    let second = fs::read_to_string(root.join("tools_config.json")).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        fs::read_to_string(root.join("docs/existing.md")).unwrap(),
        "keep me"
    );
}

#[test]
fn managed_documents_are_refreshed() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    scaffold(root);

    let path = root.join("docs/methodology/llm_methodology.md");
    fs::write(&path, "edited").unwrap();
    scaffold(root);

    assert!(fs::read_to_string(&path).unwrap().contains("Core Principles"));
}

#[test]
fn validate_empty_root_reports_everything_missing() {
    let tmp = tempfile::tempdir().unwrap();
    let report = ValidationService::new(Box::new(LocalFilesystem::new())).validate(tmp.path());

    assert!(!report.all_passed());
    let dirs = report.check(CheckKind::Directories).unwrap();
    assert_eq!(
        dirs.missing,
        vec!["docs/methodology", "docs/adr", "src", "tests", "tools"]
    );
    let docs = report.check(CheckKind::Documentation).unwrap();
    assert_eq!(docs.missing.len(), 3);
    let tools = report.check(CheckKind::ToolsConfiguration).unwrap();
    assert_eq!(tools.missing, vec!["tools_config.json"]);
}

#[test]
fn validate_flags_unparseable_tools_config() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    scaffold(root);
    fs::write(root.join("tools_config.json"), "{ not json").unwrap();

    let report = ValidationService::new(Box::new(LocalFilesystem::new())).validate(root);
    let tools = report.check(CheckKind::ToolsConfiguration).unwrap();

    assert!(!tools.passed());
    assert!(tools.missing.is_empty());
    assert_eq!(
        tools.detail.as_deref(),
        Some("Invalid tools_config.json format")
    );
    // the other checks are unaffected
    assert!(report.check(CheckKind::Directories).unwrap().passed());
    assert!(report.check(CheckKind::Documentation).unwrap().passed());
}

#[test]
fn tools_config_on_disk_has_fixed_values() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold(tmp.path());

    let raw = fs::read_to_string(tmp.path().join("tools_config.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["browser_action"]["resolution"], "900x600");
    assert_eq!(v["mcp_tools"]["auto_discovery"], true);
    assert_eq!(
        v["tavily_ai"]["search_types"]["technical"]["depth"],
        "comprehensive"
    );
}

#[test]
fn context_yaml_round_trips_project_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let config = ProjectConfig::new(
        "X",
        ProjectType::Api,
        vec!["a".into(), "b".into()],
        BaseStructure::Standard,
        root,
    )
    .unwrap();

    ScaffoldService::new(Box::new(LocalFilesystem::new()), Arc::new(MemorySink::new()))
        .run(&config)
        .unwrap();

    let raw = fs::read_to_string(root.join("docs/methodology/context.yaml")).unwrap();
    let context: llm_setup_core::domain::ProjectContext = serde_yaml_ng::from_str(&raw).unwrap();
    assert_eq!(context.project.name, "X");
    assert_eq!(context.project.technologies, vec!["a", "b"]);
    assert_eq!(context.state.phase, "initialization");
    assert_eq!(context.state.progress, 0);
}

#[test]
fn minimal_structure_still_validates() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let config = ProjectConfig::new(
        "tiny",
        ProjectType::Library,
        vec![],
        BaseStructure::Minimal,
        root,
    )
    .unwrap();

    ScaffoldService::new(Box::new(LocalFilesystem::new()), Arc::new(MemorySink::new()))
        .run(&config)
        .unwrap();

    assert!(!root.join("examples").exists());
    let report = ValidationService::new(Box::new(LocalFilesystem::new())).validate(root);
    assert!(report.all_passed(), "{report:?}");
}

#[test]
fn run_logs_each_stage_transition() {
    let tmp = tempfile::tempdir().unwrap();
    let (_, sink) = scaffold(tmp.path());

    assert_eq!(
        sink.messages(),
        vec![
            "Starting LLM methodology setup...",
            "Directory structure created",
            "Base documentation created",
            "Tools configured",
            "Project context created",
            "Version control configured",
            "Setup completed successfully",
        ]
    );
}
