//! `config` command handlers: path, show, init.

use ripplecast_config::{Config, config_path, save_config};

use crate::cli::{ConfigCommand, GlobalOpts};
use crate::commands;
use crate::error::CliError;
use crate::output;

pub fn handle(command: &ConfigCommand, global: &GlobalOpts) -> Result<(), CliError> {
    match command {
        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = commands::load_config(global)?;
            let rendered =
                toml::to_string_pretty(&cfg).map_err(ripplecast_config::ConfigError::from)?;
            output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init => {
            let path = config_path();
            if path.exists() {
                return Err(CliError::AlreadyInitialized {
                    path: path.display().to_string(),
                });
            }
            save_config(&Config::default())?;
            output::print_output(
                &format!("Wrote default config to {}", path.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}
