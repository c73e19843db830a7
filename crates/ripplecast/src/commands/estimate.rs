//! `estimate` command handler.

use owo_colors::OwoColorize;
use serde::Serialize;

use ripplecast_core::{SimulationParameters, SimulationResult, ViralLevel, estimator, fmt};

use crate::cli::{GlobalOpts, SimArgs};
use crate::commands;
use crate::error::CliError;
use crate::output;

/// Parameters echoed alongside the result in structured output.
#[derive(Serialize)]
struct EstimateReport {
    params: SimulationParameters,
    result: SimulationResult,
}

pub fn handle(args: &SimArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = commands::load_config(global)?;
    let params = commands::build_params(args, &cfg);
    let profiles = ripplecast_config::profile_table(&cfg)?;

    let result = estimator::estimate(&params, &profiles);
    let report = EstimateReport { params, result };

    let format = commands::output_format(global, &cfg);
    let color = output::should_color(&commands::color_mode(global, &cfg));
    let out = output::render_single(
        &format,
        &report,
        |r| detail(r, color),
        |r| r.result.central_reach.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

fn viral_colored(level: ViralLevel, color: bool) -> String {
    if !color {
        return level.label().to_string();
    }
    let (r, g, b) = level.color_rgb();
    level.label().truecolor(r, g, b).bold().to_string()
}

fn detail(report: &EstimateReport, color: bool) -> String {
    let p = &report.params;
    let r = &report.result;

    let mut lines = vec![
        format!("Platform         {}", p.platform.label()),
        format!("Initial shares   {}", fmt::group_thousands(u64::from(p.initial_shares))),
        format!(
            "Time horizon     {} ({} generations)",
            fmt::hours_label(p.time_horizon_hours),
            r.generations
        ),
        format!("Network size     {}", fmt::group_thousands(u64::from(p.network_size))),
        format!("Assumed rate     {}% (label only)", p.share_rate_percent),
        String::new(),
        format!(
            "Estimated reach  {}   (range {})",
            fmt::group_thousands(r.central_reach),
            fmt::reach_range_label(r.min_reach, r.max_reach)
        ),
        format!("Total shares     {}", fmt::group_thousands(r.total_shares)),
        format!("Platform spread  {}", fmt::spread_label(r.platform_spread)),
        format!("Virality         {}", viral_colored(r.viral_level, color)),
    ];

    if r.generations == 0 {
        lines.push(String::new());
        lines.push("Time horizon below one generation interval; seed shares only.".into());
    }

    lines.join("\n")
}
