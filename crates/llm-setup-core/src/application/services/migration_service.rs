//! Migration Copier: move a legacy project's docs, tests, sources and config
//! files into the methodology layout.
//!
//! Unlike scaffolding, a migration is a batch job. Step failures are
//! collected into a [`MigrationReport`] instead of being returned, and the
//! report is always written to the target root. A partially migrated tree is
//! left in place.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, LogSink},
    },
    domain::{
        MIGRATION_REPORT_FILE, MigrationPlan, MigrationReport, MigrationStep, PathMapping,
        merge_poetry_dependencies,
    },
    error::ScaffoldResult,
};

pub struct MigrationService {
    filesystem: Box<dyn Filesystem>,
    sink: Arc<dyn LogSink>,
    plan: MigrationPlan,
    report_file: String,
}

/// Accumulated state of one run.
#[derive(Default)]
struct Progress {
    errors: Vec<String>,
    warnings: Vec<String>,
    completed: Vec<String>,
}

impl MigrationService {
    pub fn new(filesystem: Box<dyn Filesystem>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            filesystem,
            sink,
            plan: MigrationPlan::default(),
            report_file: MIGRATION_REPORT_FILE.to_string(),
        }
    }

    pub fn with_plan(mut self, plan: MigrationPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Name of the report written at the target root.
    pub fn with_report_file(mut self, name: impl Into<String>) -> Self {
        self.report_file = name.into();
        self
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Only when the report itself cannot be written. Step failures are
    /// reported through `MigrationReport::errors`.
    #[instrument(skip_all, fields(source = %source.display(), target = %target.display()))]
    pub fn run(&self, source: &Path, target: &Path) -> ScaffoldResult<MigrationReport> {
        let mut progress = Progress::default();

        for step in MigrationStep::ALL {
            self.sink.info(&format!("Starting: {step}"));
            match self.execute(step, source, target, &mut progress.warnings) {
                Ok(()) => {
                    self.sink.info(&format!("Completed: {step}"));
                    progress.completed.push(step.to_string());
                }
                Err(e) => {
                    self.sink.error(&format!("Error in: {step}"));
                    progress.errors.push(e.to_string());
                    break;
                }
            }
        }

        let report = MigrationReport {
            success: progress.errors.is_empty(),
            errors: progress.errors,
            warnings: progress.warnings,
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            timestamp: Utc::now().to_rfc3339(),
            completed_steps: progress.completed,
        };

        self.filesystem.create_dir_all(target)?;
        self.filesystem
            .write_file(&target.join(&self.report_file), &report.to_json_pretty()?)?;

        if report.success {
            self.sink.info("Migration completed successfully");
        } else {
            self.sink.error("Migration failed");
        }
        Ok(report)
    }

    fn execute(
        &self,
        step: MigrationStep,
        source: &Path,
        target: &Path,
        warnings: &mut Vec<String>,
    ) -> Result<(), ApplicationError> {
        let fail = |reason: String| ApplicationError::MigrationFailed { step, reason };

        match step {
            MigrationStep::ValidateSource => self.validate_source(source).map_err(fail),
            MigrationStep::PrepareTarget => self
                .filesystem
                .create_dir_all(target)
                .map_err(|e| fail(e.to_string())),
            MigrationStep::MigrateDocs => self
                .copy_mapped(
                    &source.join(&self.plan.docs_dir),
                    target,
                    &self.plan.docs_mapping,
                    "documentation",
                    warnings,
                )
                .map_err(fail),
            MigrationStep::MigrateTests => self
                .copy_mapped(
                    &source.join(&self.plan.tests_dir),
                    target,
                    &self.plan.tests_mapping,
                    "tests",
                    warnings,
                )
                .map_err(fail),
            MigrationStep::MigrateSource => self.migrate_source(source, target).map_err(fail),
            MigrationStep::MigrateConfig => self.migrate_config(source, target).map_err(fail),
            MigrationStep::UpdateDependencies => {
                self.update_dependencies(target, warnings).map_err(fail)
            }
        }
    }

    fn validate_source(&self, source: &Path) -> Result<(), String> {
        if !self.filesystem.is_dir(source) {
            return Err(format!(
                "Source directory does not exist: {}",
                source.display()
            ));
        }

        let missing: Vec<&str> = self
            .plan
            .required_entries
            .iter()
            .map(String::as_str)
            .filter(|entry| !self.filesystem.exists(&source.join(entry)))
            .collect();
        if !missing.is_empty() {
            return Err(format!(
                "Required file or directory not found: {}",
                missing.join(", ")
            ));
        }
        Ok(())
    }

    /// Copy each mapped subdirectory of `base` that exists. A missing `base`
    /// is a warning, a missing mapped subdirectory is skipped.
    fn copy_mapped(
        &self,
        base: &Path,
        target: &Path,
        mapping: &[PathMapping],
        what: &str,
        warnings: &mut Vec<String>,
    ) -> Result<(), String> {
        if !self.filesystem.is_dir(base) {
            warnings.push(format!("No {what} directory found in source"));
            return Ok(());
        }

        for PathMapping { from, to } in mapping {
            let from_path = base.join(from);
            if !self.filesystem.is_dir(&from_path) {
                debug!(path = %from_path.display(), "Mapped directory absent, skipping");
                continue;
            }
            let copied = self
                .filesystem
                .copy_dir_all(&from_path, &target.join(to))
                .map_err(|e| e.to_string())?;
            self.sink
                .info(&format!("Migrated {what}: {from} -> {to} ({copied} files)"));
        }
        Ok(())
    }

    fn migrate_source(&self, source: &Path, target: &Path) -> Result<(), String> {
        let dir = &self.plan.source_dir;
        let from = source.join(dir);
        if !self.filesystem.is_dir(&from) {
            return Err(format!("Source code directory not found: {dir}"));
        }

        let copied = self
            .filesystem
            .copy_dir_all(&from, &target.join(dir))
            .map_err(|e| e.to_string())?;
        self.sink
            .info(&format!("Migrated source code ({copied} files)"));
        Ok(())
    }

    fn migrate_config(&self, source: &Path, target: &Path) -> Result<(), String> {
        for file in &self.plan.config_files {
            let from = source.join(file);
            if !self.filesystem.is_file(&from) {
                debug!(file = %file, "Configuration file absent, skipping");
                continue;
            }
            self.filesystem
                .copy_file(&from, &target.join(file))
                .map_err(|e| e.to_string())?;
            self.sink
                .info(&format!("Migrated configuration file: {file}"));
        }
        Ok(())
    }

    fn update_dependencies(&self, target: &Path, warnings: &mut Vec<String>) -> Result<(), String> {
        let descriptor = target.join(&self.plan.descriptor);
        if !self.filesystem.is_file(&descriptor) {
            return Err(format!("{} not found in target", self.plan.descriptor));
        }

        let content = self
            .filesystem
            .read_to_string(&descriptor)
            .map_err(|e| e.to_string())?;
        let merged = merge_poetry_dependencies(&content, &self.plan.new_dependencies)
            .map_err(|e| e.to_string())?;

        for name in &merged.already_present {
            warnings.push(format!(
                "Dependency {name} already declared; existing constraint kept"
            ));
        }

        if !merged.added.is_empty() {
            self.filesystem
                .write_file(&descriptor, &merged.content)
                .map_err(|e| e.to_string())?;
            self.sink
                .info(&format!("Added dependencies: {}", merged.added.join(", ")));
        }
        Ok(())
    }
}
