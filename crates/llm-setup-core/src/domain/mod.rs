//! Core domain layer for llm-setup.
//!
//! Pure planning logic: everything here turns a [`ProjectConfig`] into
//! data ([`ProjectStructure`], reports, rendered documents). No filesystem
//! access happens in this module; writing is the application layer's job,
//! through the `Filesystem` port.
//!
//! ## Rules
//!
//! - **No I/O**: only in-memory values and serialisation
//! - **Immutable entities**: planned artifacts are plain `Clone` data
//! - **Fixed tables**: layouts, documents and tool options are constants
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    documents::{DocumentSpec, METHODOLOGY_DOCUMENTS, RenderContext},
    layout::{Layout, REQUIRED_DIRECTORIES, REQUIRED_DOCUMENTS},
    migration_plan::{
        DependencyMerge, DependencySpec, MigrationPlan, MigrationStep, PathMapping,
        merge_poetry_dependencies,
    },
    project_config::{ConfigDocument, ProjectConfig, REQUIRED_FIELDS},
    project_context::ProjectContext,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    reports::{CheckKind, CheckResult, MIGRATION_REPORT_FILE, MigrationReport, ValidationReport},
    tools_config::ToolsConfiguration,
};

pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{BaseStructure, ProjectType};

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> ProjectConfig {
        ConfigDocument::from_json(
            r#"{"name":"demo","type":"api","technologies":["python","fastapi"],"base_structure":"standard"}"#,
        )
        .unwrap()
        .into_config("/tmp/demo")
        .unwrap()
    }

    #[test]
    fn every_stage_plan_validates_and_merges_without_duplicates() {
        let config = demo();
        let root = config.documentation_path().to_path_buf();

        let mut plan = Layout::for_structure(config.base_structure()).plan(&root);
        plan.extend(entities::documents::plan_documents(&config));
        plan.extend(ToolsConfiguration::default().plan(&root).unwrap());
        plan.extend(ProjectContext::seed(&config).plan(&root).unwrap());
        plan.extend(entities::documents::plan_gitignore(&root));

        assert!(DomainValidator::validate_project_structure(&plan).is_ok());
        assert_eq!(plan.directories().count(), 9);
        // six documents, tools config, context, ignore file
        assert_eq!(plan.files().count(), 9);
    }

    #[test]
    fn required_documents_are_generated() {
        let generated: Vec<String> = METHODOLOGY_DOCUMENTS
            .iter()
            .map(DocumentSpec::relative_path)
            .collect();
        for required in REQUIRED_DOCUMENTS {
            assert!(generated.iter().any(|g| g == required), "{required}");
        }
    }

    #[test]
    fn required_directories_exist_in_standard_layout() {
        let dirs: Vec<String> = Layout::for_structure(&BaseStructure::Standard)
            .directories()
            .map(|d| d.to_string())
            .collect();
        // `tests` itself is implied by its children
        for required in REQUIRED_DIRECTORIES.iter().filter(|d| **d != "tests") {
            assert!(dirs.iter().any(|d| d == required), "{required}");
        }
        assert!(dirs.iter().any(|d| d.starts_with("tests/")));
    }

    #[test]
    fn validator_accepts_demo_config() {
        assert!(DomainValidator::validate_config(&demo()).is_ok());
    }
}
