//! Canonical layout: the directory set each base structure materialises and
//! the artifact set the validator looks for.

use std::path::Path;

use crate::domain::{
    entities::{ProjectStructure, common::RelativePath},
    value_objects::BaseStructure,
};

/// Directory holding the generated methodology documents.
pub const METHODOLOGY_DIR: &str = "docs/methodology";

/// Tools configuration file, directly under the root.
pub const TOOLS_CONFIG_FILE: &str = "tools_config.json";

/// Seeded project context.
pub const CONTEXT_FILE: &str = "docs/methodology/context.yaml";

/// Version-control ignore file.
pub const GITIGNORE_FILE: &str = ".gitignore";

const STANDARD_DIRECTORIES: [&str; 9] = [
    "docs/adr",
    "docs/methodology",
    "docs/analysis",
    "docs/guides",
    "src",
    "tests/unit",
    "tests/integration",
    "tools",
    "examples",
];

const MINIMAL_DIRECTORIES: [&str; 5] = ["docs/adr", "docs/methodology", "src", "tests", "tools"];

/// Directories the validator requires.
pub const REQUIRED_DIRECTORIES: [&str; 5] =
    ["docs/methodology", "docs/adr", "src", "tests", "tools"];

/// Documents the validator requires.
pub const REQUIRED_DOCUMENTS: [&str; 3] = [
    "docs/methodology/llm_methodology.md",
    "docs/methodology/tools_integration.md",
    "docs/methodology/project_initialization.md",
];

/// Directory set for a base structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    directories: &'static [&'static str],
}

impl Layout {
    /// Unknown structures fall back to the standard set.
    pub fn for_structure(structure: &BaseStructure) -> Self {
        let directories: &'static [&'static str] = match structure {
            BaseStructure::Minimal => &MINIMAL_DIRECTORIES,
            BaseStructure::Standard | BaseStructure::Custom(_) => &STANDARD_DIRECTORIES,
        };
        Self { directories }
    }

    pub fn directories(&self) -> impl Iterator<Item = RelativePath> + '_ {
        self.directories.iter().map(|d| RelativePath::from(*d))
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Plan the directory tree under `root`.
    pub fn plan(&self, root: &Path) -> ProjectStructure {
        self.directories()
            .fold(ProjectStructure::new(root), |s, dir| s.with_directory(dir))
    }
}
