//! Command handlers, one module per verb, plus shared parameter plumbing.

pub mod breakdown;
pub mod config_cmd;
pub mod estimate;
pub mod platforms;

use ripplecast_config::Config;
use ripplecast_core::{Platform, SimulationParameters};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat, SimArgs};
use crate::error::CliError;

/// Load the effective config, honoring `--config`.
pub fn load_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let cfg = match &global.config {
        Some(path) => ripplecast_config::load_config_from(path)?,
        None => ripplecast_config::load_config_or_default(),
    };
    Ok(cfg)
}

/// Effective output format: flag > config default > table.
pub fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    if let Some(format) = &global.output {
        return format.clone();
    }
    match cfg.defaults.output.as_str() {
        "json" => OutputFormat::Json,
        "json-compact" => OutputFormat::JsonCompact,
        "yaml" => OutputFormat::Yaml,
        "plain" => OutputFormat::Plain,
        _ => OutputFormat::Table,
    }
}

/// Effective color mode: flag > config default > auto.
pub fn color_mode(global: &GlobalOpts, cfg: &Config) -> ColorMode {
    if let Some(mode) = &global.color {
        return mode.clone();
    }
    match cfg.defaults.color.as_str() {
        "always" => ColorMode::Always,
        "never" => ColorMode::Never,
        _ => ColorMode::Auto,
    }
}

/// Simulation parameters: config defaults, then CLI flag overrides, all
/// through the core's clamping setters.
pub fn build_params(args: &SimArgs, cfg: &Config) -> SimulationParameters {
    let mut params = ripplecast_config::initial_parameters(cfg);

    if let Some(value) = args.initial_shares {
        params.set_initial_shares(value);
    }
    if let Some(value) = args.share_rate {
        params.set_share_rate_percent(value);
    }
    if let Some(value) = args.hours {
        params.set_time_horizon_hours(value);
    }
    if let Some(ref key) = args.platform {
        params.set_platform(Platform::from_key(key));
    }
    if let Some(value) = args.network_size {
        params.set_network_size(value);
    }

    params
}
