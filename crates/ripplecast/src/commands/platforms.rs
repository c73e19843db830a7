//! `platforms` command handler — the active spread-profile table.

use serde::Serialize;
use tabled::Tabled;

use ripplecast_core::{Platform, PlatformProfile};

use crate::cli::GlobalOpts;
use crate::commands;
use crate::error::CliError;
use crate::output;

// ── Rows ────────────────────────────────────────────────────────────

/// Serializable projection of one `(platform, profile)` pair.
#[derive(Serialize)]
struct PlatformEntry {
    platform: Platform,
    profile: PlatformProfile,
}

#[derive(Tabled)]
struct PlatformRow {
    #[tabled(rename = "Platform")]
    platform: &'static str,
    #[tabled(rename = "Reach / Share")]
    reach: String,
    #[tabled(rename = "Share Rate")]
    rate: String,
}

impl From<&PlatformEntry> for PlatformRow {
    fn from(entry: &PlatformEntry) -> Self {
        let (reach_min, reach_max) = entry.profile.reach_per_share;
        let (rate_min, rate_max) = entry.profile.share_rate;
        Self {
            platform: entry.platform.label(),
            reach: format!("{reach_min}\u{2013}{reach_max}"),
            rate: format!("{:.0}%\u{2013}{:.0}%", rate_min * 100.0, rate_max * 100.0),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = commands::load_config(global)?;
    let table = ripplecast_config::profile_table(&cfg)?;

    let entries: Vec<PlatformEntry> = table
        .iter()
        .map(|(platform, profile)| PlatformEntry {
            platform,
            profile: *profile,
        })
        .collect();

    let format = commands::output_format(global, &cfg);
    let out = output::render_list(
        &format,
        &entries,
        |e| PlatformRow::from(e),
        |e| e.platform.key().to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
