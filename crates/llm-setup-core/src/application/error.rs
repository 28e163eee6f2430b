//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::MigrationStep;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A path the operation needs does not exist.
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    /// One migration step failed; the run stops there.
    #[error("{step} failed: {reason}")]
    MigrationFailed {
        step: MigrationStep,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-running is safe: completed steps are simply refreshed".into(),
            ],
            Self::NotFound { path } => vec![
                format!("Check that {} exists", path.display()),
                "Paths are resolved relative to the current directory".into(),
            ],
            Self::MigrationFailed { .. } => vec![
                "See migration_report.json in the target directory".into(),
                "Fix the source project and run the migration again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::MigrationFailed { .. } => ErrorCategory::Validation,
        }
    }
}
