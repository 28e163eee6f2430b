//! Scaffold Service - main application orchestrator.
//!
//! This service sequences the scaffold pipeline:
//!
//! ```text
//! CreatingLayout ─► EmittingDocuments ─► ConfiguringTools ─► SeedingContext ─► ConfiguringVcs ─► Done
//! ```
//!
//! Each stage plans a [`ProjectStructure`] in the domain layer and writes it
//! through the [`Filesystem`] port. Every write is create-or-overwrite, so a
//! failed run can simply be repeated: there is no rollback and no
//! "project already exists" check.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, LogSink},
    domain::{
        BaseStructure, DomainValidator as validator, FsEntry, Layout, ProjectConfig,
        ProjectContext, ProjectStructure, ToolsConfiguration,
        entities::documents::{plan_documents, plan_gitignore},
    },
    error::ScaffoldResult,
};

/// Pipeline position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaffoldStage {
    CreatingLayout,
    EmittingDocuments,
    ConfiguringTools,
    SeedingContext,
    ConfiguringVcs,
    Done,
}

impl ScaffoldStage {
    pub const fn first() -> Self {
        Self::CreatingLayout
    }

    /// `Done` is terminal and maps to itself.
    pub const fn next(self) -> Self {
        match self {
            Self::CreatingLayout => Self::EmittingDocuments,
            Self::EmittingDocuments => Self::ConfiguringTools,
            Self::ConfiguringTools => Self::SeedingContext,
            Self::SeedingContext => Self::ConfiguringVcs,
            Self::ConfiguringVcs | Self::Done => Self::Done,
        }
    }

    /// Log line recorded once the stage has finished.
    pub const fn completion_message(self) -> &'static str {
        match self {
            Self::CreatingLayout => "Directory structure created",
            Self::EmittingDocuments => "Base documentation created",
            Self::ConfiguringTools => "Tools configured",
            Self::SeedingContext => "Project context created",
            Self::ConfiguringVcs => "Version control configured",
            Self::Done => "Setup completed successfully",
        }
    }
}

impl fmt::Display for ScaffoldStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreatingLayout => "creating layout",
            Self::EmittingDocuments => "emitting documents",
            Self::ConfiguringTools => "configuring tools",
            Self::SeedingContext => "seeding context",
            Self::ConfiguringVcs => "configuring version control",
            Self::Done => "done",
        })
    }
}

/// What a run (or a single stage) wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub root: PathBuf,
    pub directories: usize,
    pub files: usize,
}

impl ScaffoldSummary {
    fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            directories: 0,
            files: 0,
        }
    }

    fn absorb(&mut self, other: ScaffoldSummary) {
        self.directories += other.directories;
        self.files += other.files;
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    sink: Arc<dyn LogSink>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>, sink: Arc<dyn LogSink>) -> Self {
        Self { filesystem, sink }
    }

    /// Scaffold the project described by `config` at its documentation path.
    ///
    /// Stops at the first failing stage; whatever was already written stays.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            root = %config.documentation_path().display()
        )
    )]
    pub fn run(&self, config: &ProjectConfig) -> ScaffoldResult<ScaffoldSummary> {
        validator::validate_config(config)?;
        self.sink.info("Starting LLM methodology setup...");

        let mut summary = ScaffoldSummary::empty(config.documentation_path());
        let mut stage = ScaffoldStage::first();

        while stage != ScaffoldStage::Done {
            debug!(%stage, "Entering stage");
            match self.run_stage(stage, config) {
                Ok(written) => {
                    summary.absorb(written);
                    self.sink.info(stage.completion_message());
                }
                Err(e) => {
                    self.sink.error(&format!("Error during setup: {e}"));
                    return Err(e);
                }
            }
            stage = stage.next();
        }

        self.sink.info(ScaffoldStage::Done.completion_message());
        Ok(summary)
    }

    /// Everything [`run`](Self::run) would write, without writing it.
    pub fn plan(&self, config: &ProjectConfig) -> ScaffoldResult<ProjectStructure> {
        validator::validate_config(config)?;

        let mut structure = ProjectStructure::new(config.documentation_path());
        let mut stage = ScaffoldStage::first();
        while stage != ScaffoldStage::Done {
            structure.extend(Self::stage_plan(stage, config)?);
            stage = stage.next();
        }

        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    /// Create the directory set for `structure` under `root`.
    pub fn ensure_layout(
        &self,
        root: &Path,
        structure: &BaseStructure,
    ) -> ScaffoldResult<ScaffoldSummary> {
        self.write_structure(&Layout::for_structure(structure).plan(root))
    }

    /// Write the six methodology documents.
    pub fn emit_documents(&self, config: &ProjectConfig) -> ScaffoldResult<ScaffoldSummary> {
        self.write_structure(&plan_documents(config))
    }

    /// Write `tools_config.json` at `root`.
    pub fn configure_tools(&self, root: &Path) -> ScaffoldResult<ScaffoldSummary> {
        self.write_structure(&ToolsConfiguration::default().plan(root)?)
    }

    /// Write the seeded `context.yaml`.
    pub fn seed_context(&self, config: &ProjectConfig) -> ScaffoldResult<ScaffoldSummary> {
        self.write_structure(&ProjectContext::seed(config).plan(config.documentation_path())?)
    }

    /// Write `.gitignore` at `root`, replacing any existing one.
    pub fn configure_vcs(&self, root: &Path) -> ScaffoldResult<ScaffoldSummary> {
        self.write_structure(&plan_gitignore(root))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_stage(
        &self,
        stage: ScaffoldStage,
        config: &ProjectConfig,
    ) -> ScaffoldResult<ScaffoldSummary> {
        let root = config.documentation_path();
        match stage {
            ScaffoldStage::CreatingLayout => self.ensure_layout(root, config.base_structure()),
            ScaffoldStage::EmittingDocuments => self.emit_documents(config),
            ScaffoldStage::ConfiguringTools => self.configure_tools(root),
            ScaffoldStage::SeedingContext => self.seed_context(config),
            ScaffoldStage::ConfiguringVcs => self.configure_vcs(root),
            ScaffoldStage::Done => Ok(ScaffoldSummary::empty(root)),
        }
    }

    fn stage_plan(stage: ScaffoldStage, config: &ProjectConfig) -> ScaffoldResult<ProjectStructure> {
        let root = config.documentation_path();
        Ok(match stage {
            ScaffoldStage::CreatingLayout => Layout::for_structure(config.base_structure()).plan(root),
            ScaffoldStage::EmittingDocuments => plan_documents(config),
            ScaffoldStage::ConfiguringTools => ToolsConfiguration::default().plan(root)?,
            ScaffoldStage::SeedingContext => ProjectContext::seed(config).plan(root)?,
            ScaffoldStage::ConfiguringVcs => plan_gitignore(root),
            ScaffoldStage::Done => ProjectStructure::new(root),
        })
    }

    /// Write all entries in the structure, creating parents as needed.
    fn write_structure(&self, structure: &ProjectStructure) -> ScaffoldResult<ScaffoldSummary> {
        validator::validate_project_structure(structure)?;

        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        let mut summary = ScaffoldSummary::empty(root);
        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&dir.path.under(root))?;
                    summary.directories += 1;
                }
                FsEntry::File(file) => {
                    let path = file.path.under(root);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), bytes = file.size(), "Wrote file");
                    summary.files += 1;
                }
            }
        }

        Ok(summary)
    }
}
