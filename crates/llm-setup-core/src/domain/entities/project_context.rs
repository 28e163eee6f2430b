//! Seed project context (`docs/methodology/context.yaml`).
//!
//! Write-once: this crate only produces the initial record. Anything that
//! later advances `state` or `metrics` lives outside this tool.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{ProjectConfig, ProjectStructure, layout::CONTEXT_FILE},
    error::DomainError,
    value_objects::ProjectType,
};

pub const INITIAL_PHASE: &str = "initialization";
pub const INITIAL_MODE: &str = "architect";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub project: ProjectInfo,
    pub state: ProjectState,
    pub metrics: ProjectMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectState {
    pub phase: String,
    pub progress: u32,
    pub mode: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub documentation: u32,
    pub implementation: u32,
    pub testing: u32,
}

impl ProjectContext {
    pub fn seed(config: &ProjectConfig) -> Self {
        Self {
            project: ProjectInfo {
                name: config.name().to_string(),
                project_type: config.project_type().clone(),
                technologies: config.technologies().to_vec(),
            },
            state: ProjectState {
                phase: INITIAL_PHASE.into(),
                progress: 0,
                mode: INITIAL_MODE.into(),
            },
            metrics: ProjectMetrics::default(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, DomainError> {
        serde_yaml_ng::to_string(self).map_err(|e| DomainError::EncodingFailed {
            artifact: CONTEXT_FILE,
            reason: e.to_string(),
        })
    }

    pub fn plan(&self, root: &Path) -> Result<ProjectStructure, DomainError> {
        Ok(ProjectStructure::new(root).with_file(CONTEXT_FILE, self.to_yaml()?))
    }
}
