//! Shared configuration for the ripplecast CLI and TUI.
//!
//! TOML config with simulation defaults and per-platform profile
//! overrides, loaded through figment (built-in defaults → file →
//! `RIPPLECAST_*` env) and translated into `ripplecast_core` types.
//! Both binaries depend on this crate.

use std::collections::HashMap;
use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ripplecast_core::{CoreError, Platform, PlatformProfile, ProfileTable, SimulationParameters};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error(transparent)]
    Profile(#[from] CoreError),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Starting parameter values and output preferences.
    #[serde(default)]
    pub defaults: Defaults,

    /// Per-platform overrides of the built-in profile table, keyed by
    /// the lowercase platform key.
    #[serde(default)]
    pub profiles: HashMap<String, ProfileOverride>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_initial_shares")]
    pub initial_shares: u32,

    #[serde(default = "default_share_rate_percent")]
    pub share_rate_percent: u8,

    #[serde(default = "default_time_horizon_hours")]
    pub time_horizon_hours: u32,

    /// Platform key. Unknown keys resolve to whatsapp, matching the
    /// estimator's fallback contract.
    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default = "default_network_size")]
    pub network_size: u32,

    /// CLI output format: "table", "json", "json-compact", "yaml", "plain".
    #[serde(default = "default_output")]
    pub output: String,

    /// CLI color mode: "auto", "always", "never".
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            initial_shares: default_initial_shares(),
            share_rate_percent: default_share_rate_percent(),
            time_horizon_hours: default_time_horizon_hours(),
            platform: default_platform(),
            network_size: default_network_size(),
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_initial_shares() -> u32 {
    10
}
fn default_share_rate_percent() -> u8 {
    20
}
fn default_time_horizon_hours() -> u32 {
    24
}
fn default_platform() -> String {
    "whatsapp".into()
}
fn default_network_size() -> u32 {
    200
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// Partial override of one platform's spread profile. Omitted fields
/// keep the baseline values.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct ProfileOverride {
    /// `[min, max]` people newly exposed per share.
    pub reach_per_share: Option<[u32; 2]>,

    /// `[min, max]` re-share fraction, each within 0–1.
    pub share_rate: Option<[f64; 2]>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "ripplecast", "ripplecast").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("ripplecast");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path (the CLI's `--config` flag).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("RIPPLECAST_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to core types ───────────────────────────────────────

/// Starting simulation parameters from config defaults. Out-of-range
/// values go through the core's clamping setters, so a bad config can
/// shift a value but never produce an invalid parameter set.
pub fn initial_parameters(cfg: &Config) -> SimulationParameters {
    let mut params = SimulationParameters::default();
    params.set_initial_shares(cfg.defaults.initial_shares);
    params.set_share_rate_percent(cfg.defaults.share_rate_percent);
    params.set_time_horizon_hours(cfg.defaults.time_horizon_hours);
    params.set_platform(Platform::from_key(&cfg.defaults.platform));
    params.set_network_size(cfg.defaults.network_size);
    params
}

/// Build the active profile table: baseline plus config overrides.
///
/// Unlike the estimator's parameter fallback, an unknown platform key
/// *in the config file* is a validation error — silently rerouting an
/// override onto whatsapp would corrupt its baseline.
pub fn profile_table(cfg: &Config) -> Result<ProfileTable, ConfigError> {
    let mut table = ProfileTable::default();

    for (key, over) in &cfg.profiles {
        let platform: Platform = key.parse().map_err(|_| ConfigError::Validation {
            field: format!("profiles.{key}"),
            reason: format!("unknown platform key '{key}'"),
        })?;

        let baseline = *table.get(platform);
        let profile = PlatformProfile {
            reach_per_share: over
                .reach_per_share
                .map_or(baseline.reach_per_share, |[min, max]| (min, max)),
            share_rate: over
                .share_rate
                .map_or(baseline.share_rate, |[min, max]| (min, max)),
        };
        table.set(platform, profile)?;
    }

    Ok(table)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = Config::default();
        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.defaults.initial_shares, 10);
        assert_eq!(parsed.defaults.platform, "whatsapp");
        assert!(parsed.profiles.is_empty());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.defaults.network_size, 200);
        assert_eq!(parsed.defaults.output, "table");
    }

    #[test]
    fn initial_parameters_clamp_bad_values() {
        let cfg: Config = toml::from_str(
            r#"
            [defaults]
            network_size = 999999
            time_horizon_hours = 0
            platform = "mastodon"
            "#,
        )
        .unwrap();

        let params = initial_parameters(&cfg);
        assert_eq!(params.network_size, 10_000);
        assert_eq!(params.time_horizon_hours, 1);
        assert_eq!(params.platform, Platform::WhatsApp);
    }

    #[test]
    fn profile_override_merges_over_baseline() {
        let cfg: Config = toml::from_str(
            r"
            [profiles.twitter]
            reach_per_share = [50, 90]
            ",
        )
        .unwrap();

        let table = profile_table(&cfg).unwrap();
        let twitter = table.get(Platform::Twitter);
        assert_eq!(twitter.reach_per_share, (50, 90));
        // share_rate untouched
        assert_eq!(twitter.share_rate, (0.04, 0.09));
    }

    #[test]
    fn unknown_override_key_is_an_error() {
        let cfg: Config = toml::from_str(
            r"
            [profiles.mastodon]
            reach_per_share = [5, 10]
            ",
        )
        .unwrap();

        let err = profile_table(&cfg).unwrap_err();
        assert!(err.to_string().contains("mastodon"));
    }

    #[test]
    fn invalid_override_range_is_an_error() {
        let cfg: Config = toml::from_str(
            r"
            [profiles.tiktok]
            share_rate = [0.9, 0.1]
            ",
        )
        .unwrap();

        assert!(profile_table(&cfg).is_err());
    }
}
