use crate::domain::{
    entities::{ProjectConfig, ProjectStructure},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Entities enforce their own invariants at construction; this is the
/// single place services call before touching the filesystem.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ProjectConfig) -> Result<(), DomainError> {
        if config.name().trim().is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "project name cannot be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
