//! `llm-setup validate`: print the checklist for an existing project.
//!
//! Findings are the command's output, not a failure: the exit code is 0
//! whenever the checks ran, whatever they found.

use std::path::Path;

use tracing::{debug, instrument};

use llm_setup_adapters::LocalFilesystem;
use llm_setup_core::{
    application::ValidationService,
    domain::{CheckResult, ValidationReport},
};

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(project_dir = %args.project_dir.display()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let report = validate(&args.project_dir)?;
    debug!(passed = report.all_passed(), "Validation finished");

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    for check in &report.checks {
        print_check(check, &output)?;
    }
    Ok(())
}

fn validate(dir: &Path) -> CliResult<ValidationReport> {
    if !dir.is_dir() {
        return Err(CliError::PathNotFound {
            what: "Project directory",
            path: dir.to_path_buf(),
        });
    }
    Ok(ValidationService::new(Box::new(LocalFilesystem::new())).validate(dir))
}

fn print_check(check: &CheckResult, output: &OutputManager) -> CliResult<()> {
    if check.passed() {
        output.success(check.kind.success_label())?;
        return Ok(());
    }

    if !check.missing.is_empty() {
        output.error(&format!("{}:", check.kind.failure_label()))?;
        for path in &check.missing {
            output.item(path, true)?;
        }
    }
    if let Some(detail) = &check.detail {
        output.error(detail)?;
    }
    Ok(())
}
