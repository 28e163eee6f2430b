//! `llm-setup init`: write a `project_config.json`.
//!
//! Every answer can come from a flag. Whatever is missing is prompted for
//! (feature `interactive`), with `[defaults]` from the app config pre-filled.

use std::fmt::Display;
use std::path::Path;

use tracing::{debug, instrument};

use llm_setup_core::domain::{BaseStructure, ConfigDocument, ProjectType};

use crate::{
    cli::{InitArgs, ProjectTypeArg, StructureArg},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(output = %args.output.display()))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // Refuse before asking anything.
    if args.output.exists() && !args.force {
        return Err(CliError::FileExists { path: args.output });
    }

    let document = collect(&args, &config)?;
    debug!(
        name = %document.name,
        project_type = %document.project_type,
        "Configuration collected"
    );

    write_document(&document, &args.output)?;

    if output.is_json() {
        output.json(&document)?;
        return Ok(());
    }

    output.success(&format!(
        "Configuration saved to {}",
        args.output.display()
    ))?;
    output.print("")?;
    output.print("Next step: Run setup with the config file:")?;
    output.print(&format!("  llm-setup setup {}", args.output.display()))?;

    Ok(())
}

/// Build the document from flags, prompting for the rest.
fn collect(args: &InitArgs, config: &AppConfig) -> CliResult<ConfigDocument> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt::text("Project name", None)?,
    };
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "project name cannot be empty".into(),
            source: None,
        });
    }

    let project_type = match args.project_type {
        Some(t) => project_type(t),
        None => {
            let choices = ProjectType::KNOWN;
            let default = position(&choices, &config.defaults.project_type);
            choices[prompt::select("Project type", &choices, default)?].clone()
        }
    };

    let technologies = match &args.technologies {
        Some(list) => ConfigDocument::parse_technologies(list),
        None => ConfigDocument::parse_technologies(&prompt::text(
            "Technologies (comma-separated)",
            Some(config.defaults.technologies.join(",")),
        )?),
    };

    let base_structure = match args.structure {
        Some(s) => base_structure(s),
        None => {
            let choices = BaseStructure::KNOWN;
            let default = position(&choices, &config.defaults.base_structure);
            choices[prompt::select("Base structure", &choices, default)?].clone()
        }
    };

    Ok(ConfigDocument {
        name: name.trim().to_string(),
        project_type,
        technologies,
        base_structure,
    })
}

fn write_document(document: &ConfigDocument, path: &Path) -> CliResult<()> {
    let json = document.to_json_pretty().map_err(|e| CliError::Core(e.into()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_cli_context(|| format!("Failed to write configuration to '{}'", path.display()))
}

// ── Conversions CLI → core ────────────────────────────────────────────────────

fn project_type(arg: ProjectTypeArg) -> ProjectType {
    match arg {
        ProjectTypeArg::Api => ProjectType::Api,
        ProjectTypeArg::Web => ProjectType::Web,
        ProjectTypeArg::Cli => ProjectType::Cli,
        ProjectTypeArg::Library => ProjectType::Library,
    }
}

fn base_structure(arg: StructureArg) -> BaseStructure {
    match arg {
        StructureArg::Standard => BaseStructure::Standard,
        StructureArg::Minimal => BaseStructure::Minimal,
    }
}

/// Index of the choice displayed as `value`, or the first choice.
fn position<T: Display>(choices: &[T], value: &str) -> usize {
    choices
        .iter()
        .position(|c| c.to_string().eq_ignore_ascii_case(value))
        .unwrap_or(0)
}

// ── Prompts ───────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
mod prompt {
    use std::fmt::Display;

    use dialoguer::{Input, Select};

    use crate::error::{CliError, CliResult};

    pub fn text(label: &str, default: Option<String>) -> CliResult<String> {
        let mut input = Input::<String>::new().with_prompt(label);
        if let Some(default) = default {
            input = input.default(default);
        }
        input.interact_text().map_err(into_cli)
    }

    pub fn select<T: Display>(label: &str, items: &[T], default: usize) -> CliResult<usize> {
        Select::new()
            .with_prompt(label)
            .items(items)
            .default(default)
            .interact()
            .map_err(into_cli)
    }

    fn into_cli(err: dialoguer::Error) -> CliError {
        let source = std::io::Error::from(err);
        if source.kind() == std::io::ErrorKind::Interrupted {
            CliError::Cancelled
        } else {
            CliError::IoError {
                message: "Prompt failed; pass the values as flags when not on a terminal".into(),
                source,
            }
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod prompt {
    use std::fmt::Display;

    use crate::error::{CliError, CliResult};

    pub fn text(_label: &str, _default: Option<String>) -> CliResult<String> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    pub fn select<T: Display>(_label: &str, _items: &[T], _default: usize) -> CliResult<usize> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn flags(name: &str) -> InitArgs {
        InitArgs {
            name: Some(name.into()),
            project_type: Some(ProjectTypeArg::Library),
            technologies: Some(" rust , tokio,, ".into()),
            structure: Some(StructureArg::Minimal),
            output: PathBuf::from("project_config.json"),
            force: false,
        }
    }

    #[test]
    fn flags_skip_every_prompt() {
        let doc = collect(&flags("demo"), &AppConfig::default()).unwrap();
        assert_eq!(doc.name, "demo");
        assert_eq!(doc.project_type, ProjectType::Library);
        assert_eq!(doc.technologies, vec!["rust", "tokio"]);
        assert_eq!(doc.base_structure, BaseStructure::Minimal);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = collect(&flags("   "), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn written_document_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("project_config.json");
        let doc = collect(&flags("demo"), &AppConfig::default()).unwrap();

        write_document(&doc, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"name\": \"demo\""));
        assert_eq!(ConfigDocument::from_json(&raw).unwrap(), doc);
    }

    #[test]
    fn default_choice_follows_config() {
        assert_eq!(position(&ProjectType::KNOWN, "cli"), 2);
        assert_eq!(position(&ProjectType::KNOWN, "desktop"), 0);
        assert_eq!(position(&BaseStructure::KNOWN, "Minimal"), 1);
    }
}
