//! `breakdown` command handler — per-generation trace of the central cascade.

use tabled::Tabled;

use ripplecast_core::{GenerationRow, estimator, fmt};

use crate::cli::{GlobalOpts, SimArgs};
use crate::commands;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Gen")]
    generation: u32,
    #[tabled(rename = "New Carriers")]
    new_carriers: String,
    #[tabled(rename = "Total Shares")]
    total_shares: String,
    #[tabled(rename = "Total Reach")]
    total_reach: String,
}

impl From<&GenerationRow> for BreakdownRow {
    fn from(row: &GenerationRow) -> Self {
        Self {
            generation: row.generation,
            new_carriers: fmt::group_thousands(row.new_carriers),
            total_shares: fmt::group_thousands(row.total_shares),
            total_reach: fmt::group_thousands(row.total_reach),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &SimArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = commands::load_config(global)?;
    let params = commands::build_params(args, &cfg);
    let profiles = ripplecast_config::profile_table(&cfg)?;

    let rows = estimator::breakdown(&params, &profiles);
    let format = commands::output_format(global, &cfg);
    let out = output::render_list(
        &format,
        &rows,
        |r| BreakdownRow::from(r),
        |r| r.total_reach.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
