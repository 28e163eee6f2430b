// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy of the message)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Missing required fields in config: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Malformed configuration document: {0}")]
    MalformedInput(String),

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Project structure is empty")]
    EmptyStructure,

    // ========================================================================
    // Artifact Errors
    // ========================================================================
    #[error("Failed to encode {artifact}: {reason}")]
    EncodingFailed {
        artifact: &'static str,
        reason: String,
    },

    #[error("Project descriptor cannot be edited: {0}")]
    InvalidDescriptor(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfiguration(msg) => vec![
                "Check your project configuration".into(),
                format!("Details: {msg}"),
            ],
            Self::MissingFields { fields } => vec![
                format!("Add the missing field(s): {}", fields.join(", ")),
                "A complete config looks like:".into(),
                r#"  {"name": "demo", "type": "api", "technologies": ["python"], "base_structure": "standard"}"#.into(),
                "Or generate one interactively: llm-setup init".into(),
            ],
            Self::MalformedInput(_) => vec![
                "The configuration file must be a JSON object".into(),
                "Validate the file with a JSON linter".into(),
            ],
            Self::InvalidDescriptor(_) => vec![
                "Fix the TOML syntax of pyproject.toml and re-run the migration".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration(_) | Self::MissingFields { .. } => {
                ErrorCategory::Validation
            }
            Self::MalformedInput(_) | Self::InvalidDescriptor(_) => ErrorCategory::Input,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Input,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_every_field() {
        let err = DomainError::MissingFields {
            fields: vec!["type", "technologies"],
        };
        assert_eq!(
            err.to_string(),
            "Missing required fields in config: type, technologies"
        );
    }

    #[test]
    fn categories() {
        assert_eq!(
            DomainError::InvalidConfiguration("x".into()).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::MalformedInput("x".into()).category(),
            ErrorCategory::Input
        );
        assert_eq!(DomainError::EmptyStructure.category(), ErrorCategory::Internal);
    }
}
