//! CLI error types with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use ripplecast_config::ConfigError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Configuration file already exists")]
    #[diagnostic(
        code(ripplecast::already_initialized),
        help("Remove or edit the existing file at: {path}")
    )]
    AlreadyInitialized { path: String },

    #[error("Configuration error")]
    #[diagnostic(
        code(ripplecast::config),
        help(
            "Check the config file (ripplecast config path) or regenerate it\n\
             with: ripplecast config init"
        )
    )]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AlreadyInitialized { .. } => exit_code::USAGE,
            Self::Config(_) => exit_code::CONFIG,
            Self::Io(_) => exit_code::GENERAL,
        }
    }
}
