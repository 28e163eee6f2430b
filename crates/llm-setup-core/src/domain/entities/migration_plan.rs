//! What a migration copies, and how the target descriptor gets its new
//! dependencies.
//!
//! The default plan mirrors the legacy project layout:
//!
//! ```text
//! <source>/docs/adr         ──► <target>/docs/adr
//! <source>/docs/migration   ──► <target>/docs/migration
//! <source>/docs/prompt_llm  ──► <target>/docs/methodology
//! <source>/docs/analysis    ──► <target>/docs/analysis
//! <source>/docs/guides      ──► <target>/docs/guides
//! <source>/tests/{unit,integration,xml} ──► <target>/tests/{..}
//! <source>/src              ──► <target>/src
//! ```

use std::fmt;

use toml_edit::{DocumentMut, InlineTable, Item, Table, TableLike, Value};

use crate::domain::error::DomainError;

/// Copy `<source>/<base>/<from>` to `<target>/<to>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    pub from: String,
    pub to: String,
}

impl PathMapping {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A dependency to declare in the target descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    pub version: String,
}

impl DependencySpec {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPlan {
    /// Project descriptor, required in the source and edited in the target.
    pub descriptor: String,
    /// Entries that must exist in the source for it to be migratable.
    pub required_entries: Vec<String>,
    /// Source documentation directory (relative to the source root).
    pub docs_dir: String,
    pub docs_mapping: Vec<PathMapping>,
    /// Source tests directory (relative to the source root).
    pub tests_dir: String,
    pub tests_mapping: Vec<PathMapping>,
    /// Source code directory, copied wholesale to the same path.
    pub source_dir: String,
    /// Top-level files copied when present.
    pub config_files: Vec<String>,
    pub new_dependencies: Vec<DependencySpec>,
}

impl Default for MigrationPlan {
    fn default() -> Self {
        Self {
            descriptor: "pyproject.toml".into(),
            required_entries: vec!["pyproject.toml".into(), "src".into(), "tests".into()],
            docs_dir: "docs".into(),
            docs_mapping: vec![
                PathMapping::new("adr", "docs/adr"),
                PathMapping::new("migration", "docs/migration"),
                PathMapping::new("prompt_llm", "docs/methodology"),
                PathMapping::new("analysis", "docs/analysis"),
                PathMapping::new("guides", "docs/guides"),
            ],
            tests_dir: "tests".into(),
            tests_mapping: vec![
                PathMapping::new("unit", "tests/unit"),
                PathMapping::new("integration", "tests/integration"),
                PathMapping::new("xml", "tests/xml"),
            ],
            source_dir: "src".into(),
            config_files: vec![
                "pyproject.toml".into(),
                "pytest.ini".into(),
                ".env.example".into(),
                ".gitignore".into(),
                "README.md".into(),
            ],
            new_dependencies: vec![
                DependencySpec::new("cline-llm-methodology", "^1.0.0"),
                DependencySpec::new("mkdocs", "^1.5.0"),
                DependencySpec::new("mkdocs-material", "^9.0.0"),
            ],
        }
    }
}

// ── Steps ────────────────────────────────────────────────────────────────────

/// The migration pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationStep {
    ValidateSource,
    PrepareTarget,
    MigrateDocs,
    MigrateTests,
    MigrateSource,
    MigrateConfig,
    UpdateDependencies,
}

impl MigrationStep {
    pub const ALL: [MigrationStep; 7] = [
        Self::ValidateSource,
        Self::PrepareTarget,
        Self::MigrateDocs,
        Self::MigrateTests,
        Self::MigrateSource,
        Self::MigrateConfig,
        Self::UpdateDependencies,
    ];

    pub const fn description(&self) -> &'static str {
        match self {
            Self::ValidateSource => "Validating source",
            Self::PrepareTarget => "Preparing target",
            Self::MigrateDocs => "Migrating documentation",
            Self::MigrateTests => "Migrating tests",
            Self::MigrateSource => "Migrating source code",
            Self::MigrateConfig => "Migrating configuration files",
            Self::UpdateDependencies => "Updating dependencies",
        }
    }
}

impl fmt::Display for MigrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ── Descriptor merge ─────────────────────────────────────────────────────────

/// Result of merging dependencies into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyMerge {
    pub content: String,
    pub added: Vec<String>,
    /// Already declared; left with their existing constraint.
    pub already_present: Vec<String>,
}

/// Declare `deps` under `[tool.poetry.dependencies]`, creating the table if
/// needed. Everything else in the document, comments included, is kept.
///
/// # Errors
///
/// `InvalidDescriptor` when the content is not TOML or an intermediate key
/// is neither a standard nor an inline table.
pub fn merge_poetry_dependencies(
    content: &str,
    deps: &[DependencySpec],
) -> Result<DependencyMerge, DomainError> {
    let mut doc: DocumentMut = content
        .parse()
        .map_err(|e: toml_edit::TomlError| DomainError::InvalidDescriptor(e.to_string()))?;

    let (tool, inline) = child_table(doc.as_table_mut(), "tool", false)?;
    let (poetry, inline) = child_table(tool, "poetry", inline)?;
    let (dependencies, _) = child_table(poetry, "dependencies", inline)?;

    let mut added = Vec::new();
    let mut already_present = Vec::new();
    for dep in deps {
        if dependencies.contains_key(&dep.name) {
            already_present.push(dep.name.clone());
        } else {
            dependencies.insert(&dep.name, toml_edit::value(dep.version.as_str()));
            added.push(dep.name.clone());
        }
    }

    Ok(DependencyMerge {
        content: doc.to_string(),
        added,
        already_present,
    })
}

/// Table under `key`, created when absent. Inside an inline table the new
/// child has to be inline as well. The flag tells the caller which kind it got.
fn child_table<'a>(
    parent: &'a mut dyn TableLike,
    key: &str,
    inline_parent: bool,
) -> Result<(&'a mut dyn TableLike, bool), DomainError> {
    if !parent.contains_key(key) {
        let item = if inline_parent {
            Item::Value(Value::InlineTable(InlineTable::new()))
        } else {
            let mut table = Table::new();
            table.set_implicit(true);
            Item::Table(table)
        };
        parent.insert(key, item);
    }

    let not_a_table = || DomainError::InvalidDescriptor(format!("`{key}` is not a table"));
    let item = parent.get_mut(key).ok_or_else(not_a_table)?;
    let inline = item.is_inline_table();
    let table = item.as_table_like_mut().ok_or_else(not_a_table)?;
    Ok((table, inline))
}
