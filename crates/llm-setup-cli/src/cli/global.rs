//! Flags shared by every `llm-setup` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log verbosity: `-v` shows the scaffold and migration stage trail,
    /// `-vv` every file touched, `-vvv` everything.
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "More log output (-v, -vv, -vvv)",
        long_help = "Log verbosity on stderr:
    (none)  warnings and errors
    -v      stage-by-stage trail of setup and migrate
    -vv     every directory and file written or copied
    -vvv    trace"
    )]
    pub verbose: u8,

    /// Only errors and JSON results reach the terminal.
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain symbols instead of coloured ones.
    ///
    /// `NO_COLOR` follows <https://no-color.org>: any non-empty value other
    /// than a falsey one (`0`, `false`, `no`, `off`) turns colour off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Application settings file, layered over the built-in defaults.
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Settings file (defaults, output, migration)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured checklist and next steps.
    Human,
    /// Same text, no colour.
    Plain,
    /// Reports and summaries as JSON documents.
    Json,
}
