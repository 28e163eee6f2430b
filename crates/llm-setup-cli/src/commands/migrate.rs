//! `llm-setup migrate`: copy a legacy project into the methodology layout.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use llm_setup_adapters::LocalFilesystem;
use llm_setup_core::{application::MigrationService, domain::MigrationReport};

use crate::{
    cli::MigrateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::ProgressSink,
};

/// Run the migration and print its report.
///
/// A failed step is not a core error: the report is written and printed
/// first, then [`CliError::MigrationFailed`] sets the exit code.
#[instrument(skip_all, fields(source = %args.source.display(), target = %args.target.display()))]
pub fn execute(args: MigrateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let report_file = config.migration.report_file;
    let progress = Arc::new(ProgressSink::new(output.shows_progress()));
    let service = MigrationService::new(Box::new(LocalFilesystem::new()), progress.clone())
        .with_report_file(report_file.as_str());

    if !output.is_json() {
        output.header(&format!(
            "Migrating {} -> {}",
            args.source.display(),
            args.target.display()
        ))?;
    }

    let result = service.run(&args.source, &args.target);
    progress.finish();
    let report = result?;
    let report_path = args.target.join(&report_file);
    info!(success = report.success, report = %report_path.display(), "Migration finished");

    if output.is_json() {
        output.json(&report)?;
    } else {
        print_report(&report, &report_path, &output)?;
    }

    if report.success {
        Ok(())
    } else {
        Err(CliError::MigrationFailed {
            errors: report.errors.len(),
            report_path,
        })
    }
}

fn print_report(
    report: &MigrationReport,
    report_path: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    for step in &report.completed_steps {
        output.success(step)?;
    }
    for warning in &report.warnings {
        output.warning(warning)?;
    }
    for error in &report.errors {
        output.error(error)?;
    }

    output.print("")?;
    if report.success {
        output.success("Migration completed successfully")?;
    }
    output.info(&format!("Report written to {}", report_path.display()))?;
    Ok(())
}
