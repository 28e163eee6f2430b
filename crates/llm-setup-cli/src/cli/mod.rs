//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "llm-setup",
    bin_name = "llm-setup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Cline LLM Methodology setup tools",
    long_about = "llm-setup scaffolds projects for the Cline LLM methodology: \
                  directory layout, methodology documents, tool configuration \
                  and a seeded project context. It can also validate an existing \
                  project and migrate a legacy one into the layout.",
    after_help = "EXAMPLES:\n\
        \x20 llm-setup init\n\
        \x20 llm-setup setup project_config.json -o ./demo\n\
        \x20 llm-setup validate ./demo\n\
        \x20 llm-setup migrate ../api-h2h ./api-h2h-llm",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set up a new project from a configuration file.
    #[command(
        about = "Setup new project using Cline LLM Methodology",
        after_help = "CONFIG_FILE is a JSON object:\n\
            \x20 {\"name\": \"demo\", \"type\": \"api\", \
            \"technologies\": [\"python\", \"fastapi\"], \"base_structure\": \"standard\"}\n\n\
            EXAMPLES:\n\
            \x20 llm-setup setup project_config.json\n\
            \x20 llm-setup setup project_config.json --output ./somewhere/else\n\
            \x20 llm-setup setup project_config.json --dry-run"
    )]
    Setup(SetupArgs),

    /// Validate an existing project.
    #[command(
        about = "Validate existing project structure and configuration",
        after_help = "EXAMPLES:\n\
            \x20 llm-setup validate .\n\
            \x20 llm-setup validate ./demo --output-format json"
    )]
    Validate(ValidateArgs),

    /// Create a project configuration file.
    #[command(
        about = "Initialize new project configuration",
        after_help = "EXAMPLES:\n\
            \x20 llm-setup init                      # interactive\n\
            \x20 llm-setup init --name demo --type api --technologies python,fastapi"
    )]
    Init(InitArgs),

    /// Migrate a legacy project into the methodology layout.
    #[command(
        about = "Migrate a legacy project into the methodology layout",
        after_help = "A report is always written to <TARGET>/migration_report.json.\n\n\
            EXAMPLES:\n\
            \x20 llm-setup migrate ../api-h2h ./api-h2h-llm"
    )]
    Migrate(MigrateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 llm-setup completions bash > ~/.local/share/bash-completion/completions/llm-setup\n\
            \x20 llm-setup completions zsh  > ~/.zfunc/_llm-setup\n\
            \x20 llm-setup completions fish > ~/.config/fish/completions/llm-setup.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the llm-setup configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 llm-setup config get defaults.project_type\n\
            \x20 llm-setup config list\n\
            \x20 llm-setup config path"
    )]
    Config(ConfigCommands),
}

// ── setup ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SetupArgs {
    /// JSON project configuration.
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: PathBuf,

    /// Project root. Defaults to `./<name>`.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Project root to check.
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `llm-setup init`. Every flag given skips its prompt.
#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(
        short = 't',
        long = "type",
        value_enum,
        value_name = "TYPE",
        help = "Project type"
    )]
    pub project_type: Option<ProjectTypeArg>,

    /// Comma-separated list, e.g. `python,fastapi`.
    #[arg(long = "technologies", value_name = "LIST", help = "Technologies (comma-separated)")]
    pub technologies: Option<String>,

    #[arg(
        short = 's',
        long = "structure",
        value_enum,
        value_name = "STRUCTURE",
        help = "Base structure"
    )]
    pub structure: Option<StructureArg>,

    /// Where to write the configuration.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "project_config.json"
    )]
    pub output: PathBuf,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration file")]
    pub force: bool,
}

// ── migrate ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Legacy project root.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination root; created if missing, merged into if present.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `llm-setup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `llm-setup config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.project_type`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Project types offered by `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectTypeArg {
    Api,
    Web,
    Cli,
    /// Also accepted as `lib`.
    #[value(alias = "lib")]
    Library,
}

impl std::fmt::Display for ProjectTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Web => write!(f, "web"),
            Self::Cli => write!(f, "cli"),
            Self::Library => write!(f, "library"),
        }
    }
}

/// Base structures offered by `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StructureArg {
    Standard,
    Minimal,
}

impl std::fmt::Display for StructureArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
