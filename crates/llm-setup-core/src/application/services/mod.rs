//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the three
//! use cases: scaffold a project, validate one, migrate a legacy project.

pub mod migration_service;
pub mod scaffold_service;
pub mod validation_service;

pub use migration_service::MigrationService;
pub use scaffold_service::{ScaffoldService, ScaffoldStage, ScaffoldSummary};
pub use validation_service::ValidationService;
