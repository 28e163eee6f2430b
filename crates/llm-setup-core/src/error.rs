//! Unified error handling for llm-setup core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum SetupError {
    /// Errors from the domain layer (invalid configuration or content).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SetupError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in llm-setup".into(),
                "Re-run with -vvv and include the output when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Input => ErrorCategory::Input,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Path-level filesystem failure, as produced by the filesystem adapters.
    pub fn filesystem(path: impl Into<std::path::PathBuf>, reason: impl ToString) -> Self {
        Self::Application(ApplicationError::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        })
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Input,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_categories_are_carried_through() {
        let err: SetupError = DomainError::MalformedInput("x".into()).into();
        assert_eq!(err.category(), ErrorCategory::Input);

        let err: SetupError = DomainError::MissingFields {
            fields: vec!["name", "type"],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(
            err.to_string(),
            "Missing required fields in config: name, type"
        );
    }

    #[test]
    fn filesystem_helper_builds_application_error() {
        let err = SetupError::filesystem("/tmp/x", "permission denied");
        assert!(matches!(
            err,
            SetupError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert!(err.to_string().contains("permission denied"));
    }
}
