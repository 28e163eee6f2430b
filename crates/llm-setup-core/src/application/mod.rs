//! Application layer for llm-setup.
//!
//! This layer contains:
//! - **Services**: use case orchestration (scaffold, validate, migrate)
//! - **Ports**: the `Filesystem` and `LogSink` traits adapters implement
//! - **Errors**: application-specific error types
//!
//! The application layer sequences the domain layer's plans and pushes them
//! through the ports. All layout and content rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    MigrationService, ScaffoldService, ScaffoldStage, ScaffoldSummary, ValidationService,
};

pub use ports::{Filesystem, LogSink};

pub use error::ApplicationError;
