//! Implementation of the `llm-setup setup` command.
//!
//! Responsibility: read the JSON configuration, resolve the project root,
//! call the core scaffold service, and display results.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use llm_setup_adapters::LocalFilesystem;
use llm_setup_core::{
    application::ScaffoldService,
    domain::{ConfigDocument, FsEntry, ProjectConfig},
};

use crate::{
    cli::{GlobalArgs, SetupArgs},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    progress::ProgressSink,
};

/// Execute the `llm-setup setup` command.
///
/// 1. Load and shape-check the configuration document
/// 2. Resolve the project root (`--output`, else `./<name>`)
/// 3. Dry run: list the planned entries and stop
/// 4. Run the scaffold pipeline
/// 5. Print next steps
#[instrument(skip_all, fields(config_file = %args.config_file.display()))]
pub fn execute(args: SetupArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config = load_config(&args.config_file, args.output.as_deref())?;
    debug!(
        project = %config.name(),
        project_type = %config.project_type(),
        structure = %config.base_structure(),
        "Configuration loaded"
    );

    let progress = Arc::new(ProgressSink::new(!args.dry_run && output.shows_progress()));
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), progress.clone());
    let root = config.documentation_path().to_path_buf();

    if args.dry_run {
        let structure = service.plan(&config)?;
        if output.is_json() {
            let entries: Vec<String> = structure
                .entries()
                .iter()
                .map(|e| e.path().to_string())
                .collect();
            output.json(&serde_json::json!({
                "root": root,
                "dry_run": true,
                "entries": entries,
            }))?;
            return Ok(());
        }

        output.info(&format!(
            "Dry run: would create {} directories and {} files under {}",
            structure.directories().count(),
            structure.files().count(),
            root.display(),
        ))?;
        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => output.item(&format!("{}/", dir.path), false)?,
                FsEntry::File(file) => output.item(&file.path.to_string(), false)?,
            }
        }
        return Ok(());
    }

    if !output.is_json() {
        output.header(&format!("Setting up '{}'...", config.name()))?;
    }
    info!(project = %config.name(), root = %root.display(), "Setup started");

    let result = service.run(&config);
    progress.finish();
    let summary = result?;

    if output.is_json() {
        output.json(&serde_json::json!({
            "root": summary.root,
            "directories": summary.directories,
            "files": summary.files,
        }))?;
        return Ok(());
    }

    output.print("")?;
    output.success(&format!("Project setup complete: {}", root.display()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  1. Review generated documentation in docs/")?;
        output.print("  2. Configure tools in tools_config.json")?;
        output.print("  3. Initialize version control")?;
        output.print("  4. Start development!")?;
    }

    Ok(())
}

/// Read `path` and build the configuration rooted at `output`, or at
/// `./<name>` when no output directory is given.
pub fn load_config(path: &Path, output: Option<&Path>) -> CliResult<ProjectConfig> {
    if !path.is_file() {
        return Err(CliError::PathNotFound {
            what: "Configuration file",
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
    let document = ConfigDocument::from_json(&raw).map_err(|e| CliError::Core(e.into()))?;

    let root = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&document.name));

    document
        .into_config(root)
        .map_err(|e| CliError::Core(e.into()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("project_config.json");
        fs::write(&path, body).unwrap();
        path
    }

    const FULL: &str = r#"{"name": "demo", "type": "api", "technologies": ["python"], "base_structure": "standard"}"#;

    #[test]
    fn root_defaults_to_project_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&write_config(dir.path(), FULL), None).unwrap();
        assert_eq!(config.documentation_path(), Path::new("demo"));
    }

    #[test]
    fn output_overrides_root() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("elsewhere");
        let config = load_config(&write_config(dir.path(), FULL), Some(&out)).unwrap();
        assert_eq!(config.documentation_path(), out.as_path());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("nope.json"), None).unwrap_err();
        assert!(matches!(err, CliError::PathNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn missing_fields_are_all_named() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"name": "test-project"}"#);
        let err = load_config(&path, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields in config: type, technologies, base_structure"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn blank_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"{"name": "  ", "type": "api", "technologies": [], "base_structure": "standard"}"#,
        );
        assert_eq!(load_config(&path, None).unwrap_err().exit_code(), 2);
    }
}
