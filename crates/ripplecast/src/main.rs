//! `ripplecast` — CLI for the content-diffusion estimator.
//!
//! Entry point: argument parsing, tracing setup, command dispatch, and
//! miette-rendered error reporting with structured exit codes.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(&cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    tracing::debug!(command = ?cli.command, "dispatching command");

    match &cli.command {
        Command::Estimate(args) => commands::estimate::handle(args, &cli.global),
        Command::Breakdown(args) => commands::breakdown::handle(args, &cli.global),
        Command::Platforms => commands::platforms::handle(&cli.global),
        Command::Config(args) => commands::config_cmd::handle(&args.command, &cli.global),
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "ripplecast", &mut std::io::stdout());
            Ok(())
        }
    }
}
