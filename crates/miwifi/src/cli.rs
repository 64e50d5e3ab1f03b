//! Clap derive structures for the `miwifi` CLI.
//!
//! Also compiled by `build.rs` for man page generation, so this module may
//! only depend on clap and clap_complete.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// miwifi -- validate MiWiFi router API responses
#[derive(Debug, Parser)]
#[command(
    name = "miwifi",
    version,
    about = "Validate and normalize MiWiFi router API responses",
    long_about = "Checks raw JSON captured from a MiWiFi router's management API against\n\
        the typed schema of its endpoint and prints the normalized record, or\n\
        every field path that failed.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format (overrides the config file)
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Fail when a validated response carries a non-zero result code
    #[arg(long, global = true)]
    pub strict_code: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "MIWIFI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Field/value table of the flattened record
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Rust debug representation of the typed record
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate one response against an endpoint schema
    #[command(alias = "v")]
    Validate(ValidateArgs),

    /// Validate several responses at once, reporting every failure
    Batch(BatchArgs),

    /// List endpoint identifiers and the records they validate to
    #[command(alias = "ls")]
    Endpoints,

    /// Show a byte count in every unit
    Bytes(BytesArgs),

    /// Inspect the configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Endpoint identifier, e.g. `wan` or `smart_vpn`
    pub endpoint: String,

    /// JSON file to read (stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// JSON object mapping endpoint identifiers to payloads (stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BytesArgs {
    /// Byte count as an integer or quoted integer string
    pub value: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
