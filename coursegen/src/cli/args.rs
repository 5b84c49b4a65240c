//! CLI argument definitions
//!
//! All Clap derive structs for `coursegen` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use coursegen_core::labels::Lang;

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Scaffold MyST course sites from a JSON course plan.
#[derive(Parser, Debug)]
#[command(name = "coursegen", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "COURSEGEN_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,

    /// Course project root.
    #[arg(long, default_value = ".", global = true, env = "COURSEGEN_ROOT")]
    pub root: PathBuf,

    /// Course plan file [default: planeamiento.json under the root].
    #[arg(long, global = true, env = "COURSEGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one page per week under `sessions/`.
    Sessions(PageArgs),

    /// Generate activity skeletons under `activities/`.
    Activities(PageArgs),

    /// Generate the course program page.
    Program(ProgramArgs),

    /// Generate the sessions overview table.
    Table(LangArgs),

    /// Create or update the MyST site configuration.
    Site(SiteCommand),

    /// Insert or refresh metadata badges on activity pages.
    Badges(LangArgs),

    /// Run every generation step in order.
    Scaffold(ScaffoldArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version and build information.
    Version(VersionArgs),
}

// ============================================================================
// Page Commands
// ============================================================================

/// Language selection shared by generating commands.
#[derive(Args, Debug)]
pub struct LangArgs {
    /// Language of generated labels.
    #[arg(long, default_value = "es")]
    pub lang: Lang,
}

/// Arguments for `sessions` and `activities`.
#[derive(Args, Debug)]
pub struct PageArgs {
    #[command(flatten)]
    pub lang: LangArgs,

    /// Only generate pages for this week.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub week: Option<u32>,

    /// Overwrite existing files.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `program`.
#[derive(Args, Debug)]
pub struct ProgramArgs {
    #[command(flatten)]
    pub lang: LangArgs,

    /// Only create the page if it does not exist yet.
    #[arg(long)]
    pub init: bool,
}

// ============================================================================
// Site Command
// ============================================================================

/// Site configuration commands.
#[derive(Args, Debug)]
pub struct SiteCommand {
    /// Site subcommand.
    #[command(subcommand)]
    pub subcommand: SiteSubcommand,
}

/// Site subcommands.
#[derive(Subcommand, Debug)]
pub enum SiteSubcommand {
    /// Create `myst.yml` from the course plan if it does not exist.
    Init(LangArgs),

    /// Copy course metadata into an existing `myst.yml`.
    Sync(LangArgs),

    /// Point table-of-contents entries at the current session files.
    Toc,
}

// ============================================================================
// Scaffold Command
// ============================================================================

/// Arguments for `scaffold`.
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Language of generated labels.
    #[arg(long, default_value = "en")]
    pub lang: Lang,

    /// Overwrite generated files (asks for confirmation).
    #[arg(long)]
    pub force: bool,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
