//! MigrationService tests: the batch-job error model and the tree merge.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use llm_setup_adapters::{LocalFilesystem, MemoryFilesystem, MemorySink};
use llm_setup_core::prelude::*;

const PYPROJECT: &str = "[tool.poetry]\nname = \"api-h2h\"\n\n[tool.poetry.dependencies]\npython = \"^3.11\"\n";

fn legacy_project(root: &Path) {
    fs::create_dir_all(root.join("src/api")).unwrap();
    fs::write(root.join("src/api/main.py"), "print('hi')").unwrap();
    fs::create_dir_all(root.join("tests/unit")).unwrap();
    fs::write(root.join("tests/unit/test_main.py"), "def test(): pass").unwrap();
    fs::create_dir_all(root.join("docs/adr")).unwrap();
    fs::write(root.join("docs/adr/0001.md"), "# ADR 1").unwrap();
    fs::create_dir_all(root.join("docs/prompt_llm")).unwrap();
    fs::write(root.join("docs/prompt_llm/prompt.md"), "prompt").unwrap();
    fs::write(root.join("pyproject.toml"), PYPROJECT).unwrap();
    fs::write(root.join("pytest.ini"), "[pytest]\n").unwrap();
}

fn migrate(source: &Path, target: &Path) -> (MigrationReport, MemorySink) {
    let sink = MemorySink::new();
    let report = MigrationService::new(Box::new(LocalFilesystem::new()), Arc::new(sink.clone()))
        .run(source, target)
        .unwrap();
    (report, sink)
}

fn read_report(target: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(target.join("migration_report.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn full_migration_copies_and_remaps() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("legacy");
    let target = tmp.path().join("new");
    legacy_project(&source);

    let (report, sink) = migrate(&source, &target);

    assert!(report.success, "{:?}", report.errors);
    assert_eq!(report.completed_steps.len(), 7);
    assert!(target.join("src/api/main.py").is_file());
    assert!(target.join("tests/unit/test_main.py").is_file());
    assert!(target.join("docs/adr/0001.md").is_file());
    assert!(target.join("docs/methodology/prompt.md").is_file());
    assert!(target.join("pytest.ini").is_file());
    assert!(!target.join(".env.example").exists());
    assert!(sink.contains("Migration completed successfully"));

    let written = read_report(&target);
    assert_eq!(written["success"], true);
    assert_eq!(written["source"], source.display().to_string());
}

#[test]
fn dependencies_are_merged_into_poetry_table() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("legacy");
    let target = tmp.path().join("new");
    legacy_project(&source);

    migrate(&source, &target);

    let raw = fs::read_to_string(target.join("pyproject.toml")).unwrap();
    let parsed: toml_edit::DocumentMut = raw.parse().unwrap();
    let deps = &parsed["tool"]["poetry"]["dependencies"];
    assert_eq!(deps["python"].as_str(), Some("^3.11"));
    assert_eq!(deps["cline-llm-methodology"].as_str(), Some("^1.0.0"));
    assert_eq!(deps["mkdocs"].as_str(), Some("^1.5.0"));
    assert_eq!(deps["mkdocs-material"].as_str(), Some("^9.0.0"));
}

#[test]
fn existing_dependency_is_kept_with_a_warning() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("legacy");
    let target = tmp.path().join("new");
    legacy_project(&source);
    fs::write(
        source.join("pyproject.toml"),
        format!("{PYPROJECT}mkdocs = \"^1.4.0\"\n"),
    )
    .unwrap();

    let (report, _) = migrate(&source, &target);

    assert!(report.success);
    assert!(report.warnings.iter().any(|w| w.contains("mkdocs")));
    let raw = fs::read_to_string(target.join("pyproject.toml")).unwrap();
    assert!(raw.contains("mkdocs = \"^1.4.0\""));
}

#[test]
fn missing_src_fails_with_report_and_copies_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("legacy");
    let target = tmp.path().join("new");
    legacy_project(&source);
    fs::remove_dir_all(source.join("src")).unwrap();

    let (report, sink) = migrate(&source, &target);

    assert!(!report.success);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("src"));
    assert!(report.completed_steps.is_empty());
    assert!(!target.join("docs").exists());
    assert!(!target.join("tests").exists());
    assert!(sink.contains("Migration failed"));

    assert_eq!(read_report(&target)["success"], false);
}

#[test]
fn missing_source_directory_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("new");

    let (report, _) = migrate(&tmp.path().join("does-not-exist"), &target);

    assert!(!report.success);
    assert!(report.errors[0].contains("Source directory does not exist"));
    assert!(target.join("migration_report.json").is_file());
}

#[test]
fn missing_docs_directory_is_only_a_warning() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("legacy");
    let target = tmp.path().join("new");
    legacy_project(&source);
    fs::remove_dir_all(source.join("docs")).unwrap();

    let (report, _) = migrate(&source, &target);

    assert!(report.success);
    assert_eq!(
        report.warnings,
        vec!["No documentation directory found in source".to_string()]
    );
}

#[test]
fn migration_merges_into_existing_target() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("legacy");
    let target = tmp.path().join("new");
    legacy_project(&source);
    fs::create_dir_all(target.join("docs/adr")).unwrap();
    fs::write(target.join("docs/adr/0000-existing.md"), "old").unwrap();
    fs::write(target.join("docs/adr/0001.md"), "stale").unwrap();

    let (report, _) = migrate(&source, &target);

    assert!(report.success);
    assert_eq!(
        fs::read_to_string(target.join("docs/adr/0000-existing.md")).unwrap(),
        "old"
    );
    assert_eq!(
        fs::read_to_string(target.join("docs/adr/0001.md")).unwrap(),
        "# ADR 1"
    );
}

#[test]
fn unparseable_descriptor_fails_the_dependency_step() {
    let fs_mem = MemoryFilesystem::new();
    fs_mem.insert_file("/legacy/pyproject.toml", "[tool.poetry\n");
    fs_mem.insert_file("/legacy/src/app.py", "");
    fs_mem.insert_file("/legacy/tests/unit/test_app.py", "");

    let report = MigrationService::new(Box::new(fs_mem.clone()), Arc::new(MemorySink::new()))
        .run(Path::new("/legacy"), Path::new("/new"))
        .unwrap();

    assert!(!report.success);
    assert_eq!(report.completed_steps.len(), 6);
    assert!(report.errors[0].starts_with("Updating dependencies failed"));
    assert!(fs_mem.is_file(Path::new("/new/migration_report.json")));
}

#[test]
fn report_file_name_is_configurable() {
    let fs_mem = MemoryFilesystem::new();
    let report = MigrationService::new(Box::new(fs_mem.clone()), Arc::new(MemorySink::new()))
        .with_report_file("report.json")
        .run(Path::new("/missing"), Path::new("/out"))
        .unwrap();

    assert!(!report.success);
    assert!(fs_mem.is_file(Path::new("/out/report.json")));
}
