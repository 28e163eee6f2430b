pub mod common;
pub mod documents;
pub mod layout;
pub mod migration_plan;
pub mod project_config;
pub mod project_context;
pub mod project_structure;
pub mod reports;
pub mod tools_config;

pub use crate::domain::DomainError;
pub use documents::{DocumentSpec, METHODOLOGY_DOCUMENTS, RenderContext};
pub use layout::Layout;
pub use migration_plan::{DependencySpec, MigrationPlan, MigrationStep, PathMapping};
pub use project_config::{ConfigDocument, ProjectConfig};
pub use project_context::ProjectContext;
pub use project_structure::ProjectStructure;
pub use reports::{CheckKind, CheckResult, MigrationReport, ValidationReport};
pub use tools_config::ToolsConfiguration;
