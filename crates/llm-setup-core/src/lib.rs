//! llm-setup core: hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the llm-setup
//! project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          llm-setup-cli (CLI)            │
//! │     (Calls the driving ports)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Scaffold, Validation, Migration)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Filesystem, LogSink)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   llm-setup-adapters (Infrastructure)   │
//! │ (LocalFilesystem, TracingSink, Memory*) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectConfig, Layout, documents, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use llm_setup_core::prelude::*;
//!
//! let config = ConfigDocument::from_json(&raw)?.into_config("./demo")?;
//!
//! let service = ScaffoldService::new(filesystem, Arc::new(sink));
//! let summary = service.run(&config)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        MigrationService, ScaffoldService, ScaffoldStage, ScaffoldSummary, ValidationService,
        ports::{Filesystem, LogSink},
    };
    pub use crate::domain::{
        BaseStructure, CheckKind, ConfigDocument, MigrationPlan, MigrationReport, ProjectConfig,
        ProjectStructure, ProjectType, ValidationReport,
    };
    pub use crate::error::{ErrorCategory, ScaffoldResult, SetupError};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
