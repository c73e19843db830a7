//! `ripplecast-tui` — interactive terminal calculator for content
//! diffusion estimates.
//!
//! Built on [ratatui](https://ratatui.rs) around an action-dispatch loop:
//! control-surface edits flow through the core `Calculator`'s clamping
//! setters, every change recomputes the estimate, and the propagation
//! scene is repainted on a Braille canvas.
//!
//! Logs are written to a file (default `/tmp/ripplecast-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app
//! launch.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ripplecast_core::Platform;

use crate::app::App;

/// Interactive calculator for estimating content spread across platforms.
#[derive(Parser, Debug)]
#[command(name = "ripplecast-tui", version, about)]
struct Cli {
    /// Config file path (defaults to the platform config dir)
    #[arg(long, env = "RIPPLECAST_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Starting platform key (overrides the config default)
    #[arg(short = 'p', long)]
    platform: Option<String>,

    /// Log file path (defaults to /tmp/ripplecast-tui.log)
    #[arg(long, default_value = "/tmp/ripplecast-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ripplecast_tui={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("ripplecast-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    // Starting state: config defaults, CLI platform override on top.
    // A broken config still launches — the estimator works off the
    // baseline table either way.
    let cfg = match &cli.config {
        Some(path) => ripplecast_config::load_config_from(path).unwrap_or_default(),
        None => ripplecast_config::load_config_or_default(),
    };
    let mut params = ripplecast_config::initial_parameters(&cfg);
    if let Some(ref key) = cli.platform {
        params.set_platform(Platform::from_key(key));
    }
    let profiles = ripplecast_config::profile_table(&cfg).unwrap_or_default();

    info!(platform = %params.platform, "starting ripplecast-tui");

    let mut app = App::new(params, &profiles);
    app.run().await?;

    Ok(())
}
