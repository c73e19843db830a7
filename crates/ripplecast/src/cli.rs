//! Clap derive structures for the `ripplecast` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ripplecast -- estimate how far content spreads through a social network
#[derive(Debug, Parser)]
#[command(
    name = "ripplecast",
    version,
    about = "Estimate content diffusion across social platforms",
    long_about = "Estimates how far a piece of content spreads through a social\n\
        network over time, using a discrete-generation branching simulation\n\
        with per-platform reach and re-share profiles. Produces a bounded\n\
        estimate (central, minimum, maximum) plus a virality classification.",
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
    /// Config file path (defaults to the platform config dir)
    #[arg(long, env = "RIPPLECAST_CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config file's setting, then table)
    #[arg(long, short = 'o', env = "RIPPLECAST_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output (defaults to the config file's setting, then auto)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Simulation parameter flags ───────────────────────────────────────

/// Parameter overrides shared by `estimate` and `breakdown`. Absent
/// flags keep the config-file defaults.
#[derive(Debug, Args)]
pub struct SimArgs {
    /// Seed shares at generation 0
    #[arg(long, short = 'i')]
    pub initial_shares: Option<u32>,

    /// Assumed average share rate percentage (label only; the model
    /// always uses platform-profile rates)
    #[arg(long, value_name = "PERCENT")]
    pub share_rate: Option<u8>,

    /// Time horizon in hours (one generation per 1.5 h)
    #[arg(long, short = 't', value_name = "HOURS")]
    pub hours: Option<u32>,

    /// Platform key: whatsapp, twitter, facebook, telegram, tiktok,
    /// instagram. Unknown keys fall back to whatsapp.
    #[arg(long, short = 'p', value_name = "KEY")]
    pub platform: Option<String>,

    /// Contact-network size, 10-10000 in steps of 10
    #[arg(long, short = 'n')]
    pub network_size: Option<u32>,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the diffusion estimate
    #[command(alias = "est", alias = "e")]
    Estimate(SimArgs),

    /// Generation-by-generation trace of the central cascade
    #[command(alias = "bd")]
    Breakdown(SimArgs),

    /// Show the active platform spread profiles
    #[command(alias = "plat")]
    Platforms,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Config subcommands ───────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Show the effective configuration (defaults + file + env)
    Show,
    /// Write a starter config file with the built-in defaults
    Init,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
