//! CLI argument definitions
//!
//! All Clap derive structs for `critnlp` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;
use crate::render::LinkStyle;

// ============================================================================
// Root CLI
// ============================================================================

/// Site engine for the Critical NLP Group.
#[derive(Parser, Debug)]
#[command(name = "critnlp", author, version, about)]
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

    /// Log line format on stderr.
    #[arg(long, default_value = "human", global = true, env = "CRITNLP_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "CRITNLP_COLOR")]
    pub color: ColorChoice,

    /// YAML content file to use instead of the built-in content.
    #[arg(long, global = true, env = "CRITNLP_CONTENT")]
    pub content: Option<PathBuf>,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one page as an HTML document.
    Render(RenderArgs),

    /// Write the whole site as static HTML files.
    Build(BuildArgs),

    /// Show which record a page id resolves to.
    Resolve(ResolveArgs),

    /// Replay a scripted navigation session.
    Session(SessionArgs),

    /// Validate the content table.
    Validate(ValidateArgs),

    /// Print the built-in content table as YAML.
    Export,

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page id to render.
    #[arg(default_value = "home")]
    pub page: String,

    /// Link style for navigation links.
    #[arg(long, default_value = "fragment")]
    pub links: LinkStyle,

    /// Render with this top-level menu item's dropdown open.
    #[arg(long, value_name = "MENU_ID")]
    pub open: Option<String>,

    /// Render with the mobile menu panel open.
    #[arg(long)]
    pub mobile: bool,

    /// Write to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory.
    #[arg(short, long, default_value = "site", env = "CRITNLP_OUTPUT")]
    pub output: PathBuf,

    /// Link style for navigation links.
    #[arg(long, default_value = "files")]
    pub links: LinkStyle,

    /// Output format for the build report.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Page id to resolve.
    pub page: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `session`.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Events: goto:ID, select:ID, hash:FRAG, back, forward, enter:ID,
    /// leave:ID, toggle:ID, dismiss, mobile, scroll:N.
    #[arg(required = true)]
    pub events: Vec<String>,

    /// Initial URL fragment (deep link).
    #[arg(long, default_value = "")]
    pub start: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
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
