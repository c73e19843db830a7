//! The diffusion estimator: a discrete-generation branching simulation.
//!
//! One cascade run per estimate branch — floor, central, ceiling platform
//! parameters — each with its own saturation-cap multiplier. Deterministic:
//! no randomness anywhere in the numeric path (node scatter lives in
//! [`crate::scene`]).

use crate::model::{
    GenerationRow, PlatformProfile, ProfileTable, SimulationParameters, SimulationResult,
    ViralLevel,
};

// ── Branch policy ───────────────────────────────────────────────────

/// Saturation-cap multiplier per estimate branch. Three independently
/// tunable policy values, deliberately not a single shared constant.
const CAP_FLOOR: u64 = 1;
const CAP_CENTRAL: u64 = 2;
const CAP_CEILING: u64 = 4;

/// Parameters for one cascade run.
#[derive(Debug, Clone, Copy)]
struct Branch {
    reach_per_share: u64,
    share_rate: f64,
    cap_multiplier: u64,
}

impl Branch {
    fn floor(profile: &PlatformProfile) -> Self {
        Self {
            reach_per_share: u64::from(profile.reach_per_share.0),
            share_rate: profile.share_rate.0,
            cap_multiplier: CAP_FLOOR,
        }
    }

    /// Midpoint parameters: reach rounds half-up to an integer, the rate
    /// stays fractional.
    fn central(profile: &PlatformProfile) -> Self {
        let (reach_min, reach_max) = profile.reach_per_share;
        let (rate_min, rate_max) = profile.share_rate;
        Self {
            reach_per_share: (u64::from(reach_min) + u64::from(reach_max)).div_ceil(2),
            share_rate: f64::midpoint(rate_min, rate_max),
            cap_multiplier: CAP_CENTRAL,
        }
    }

    fn ceiling(profile: &PlatformProfile) -> Self {
        Self {
            reach_per_share: u64::from(profile.reach_per_share.1),
            share_rate: profile.share_rate.1,
            cap_multiplier: CAP_CEILING,
        }
    }
}

// ── Cascade ─────────────────────────────────────────────────────────

/// Carriers in the next generation. Truncation is intentional: a
/// generation with fewer than `1/share_rate` carriers decays to zero and
/// the cascade self-terminates.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::as_conversions
)]
fn next_generation(current: u64, share_rate: f64) -> u64 {
    (current as f64 * share_rate).floor() as u64
}

/// Run one branching cascade: returns `(total_reach, total_shares)`,
/// both pre-clamp.
fn run_cascade(initial_shares: u64, generations: u32, branch: Branch) -> (u64, u64) {
    let mut current = initial_shares;
    let mut total_reach = initial_shares;
    let mut total_shares = initial_shares;

    for _ in 0..generations {
        current = next_generation(current, branch.share_rate);
        if current == 0 {
            break;
        }
        total_shares = total_shares.saturating_add(current);
        total_reach =
            total_reach.saturating_add(current.saturating_mul(branch.reach_per_share));
    }

    (total_reach, total_shares)
}

/// Cap reach at `network_size × generations × branch multiplier`. A
/// zero-generation run is exempt — capping there would zero out
/// legitimate seed shares.
fn saturate(reach: u64, network_size: u32, generations: u32, cap_multiplier: u64) -> u64 {
    if generations == 0 {
        return reach;
    }
    reach.min(u64::from(network_size) * u64::from(generations) * cap_multiplier)
}

// ── Derived classifications ─────────────────────────────────────────

/// Step estimate of how many distinct platforms the content has leaked
/// to, from the central share count.
fn platform_spread(total_shares: u64) -> u8 {
    if total_shares < 50 {
        1
    } else if total_shares < 200 {
        2
    } else if total_shares < 500 {
        3
    } else if total_shares < 1_000 {
        4
    } else {
        5
    }
}

// ── Public entry points ─────────────────────────────────────────────

/// Estimate content spread for the given parameters.
///
/// Pure and deterministic: identical parameters always yield an identical
/// result. The display-only `share_rate_percent` is ignored here by
/// contract — the cascade uses platform-profile rates.
pub fn estimate(params: &SimulationParameters, profiles: &ProfileTable) -> SimulationResult {
    let profile = profiles.get(params.platform);
    let generations = params.generations();
    let initial = u64::from(params.initial_shares);

    let central = Branch::central(profile);
    let floor = Branch::floor(profile);
    let ceiling = Branch::ceiling(profile);

    let (central_raw, total_shares) = run_cascade(initial, generations, central);
    let (min_raw, _) = run_cascade(initial, generations, floor);
    let (max_raw, _) = run_cascade(initial, generations, ceiling);

    let central_reach = saturate(
        central_raw,
        params.network_size,
        generations,
        central.cap_multiplier,
    );
    let min_reach = saturate(min_raw, params.network_size, generations, floor.cap_multiplier);
    let max_reach = saturate(
        max_raw,
        params.network_size,
        generations,
        ceiling.cap_multiplier,
    );

    SimulationResult {
        central_reach,
        min_reach,
        max_reach,
        total_shares,
        platform_spread: platform_spread(total_shares),
        viral_level: ViralLevel::classify(central_reach),
        generations,
    }
}

/// Generation-by-generation view of the central cascade, starting from
/// the generation-0 seed row. Stops early when the cascade goes extinct.
/// Cumulative columns are raw — the saturation clamp applies only to the
/// final estimate, not to this trace.
pub fn breakdown(params: &SimulationParameters, profiles: &ProfileTable) -> Vec<GenerationRow> {
    let branch = Branch::central(profiles.get(params.platform));
    let generations = params.generations();
    let initial = u64::from(params.initial_shares);

    let mut rows = Vec::with_capacity(usize::try_from(generations.min(64)).unwrap_or(64) + 1);
    rows.push(GenerationRow {
        generation: 0,
        new_carriers: initial,
        total_shares: initial,
        total_reach: initial,
    });

    let mut current = initial;
    let mut total_shares = initial;
    let mut total_reach = initial;

    for generation in 1..=generations {
        current = next_generation(current, branch.share_rate);
        if current == 0 {
            break;
        }
        total_shares = total_shares.saturating_add(current);
        total_reach =
            total_reach.saturating_add(current.saturating_mul(branch.reach_per_share));
        rows.push(GenerationRow {
            generation,
            new_carriers: current,
            total_shares,
            total_reach,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Platform;
    use pretty_assertions::assert_eq;

    fn params() -> SimulationParameters {
        SimulationParameters::default()
    }

    fn table() -> ProfileTable {
        ProfileTable::default()
    }

    #[test]
    fn reach_never_below_initial_shares() {
        for platform in Platform::ALL {
            for initial in [0, 1, 10, 500] {
                let mut p = params();
                p.platform = platform;
                p.initial_shares = initial;
                let result = estimate(&p, &table());
                assert!(result.central_reach >= u64::from(initial));
                assert!(result.min_reach >= u64::from(initial));
                assert!(result.total_shares >= u64::from(initial));
            }
        }
    }

    #[test]
    fn bounds_are_ordered() {
        for platform in Platform::ALL {
            for initial in [1, 10, 100, 1_000] {
                for hours in [1, 6, 24, 72] {
                    let mut p = params();
                    p.platform = platform;
                    p.initial_shares = initial;
                    p.time_horizon_hours = hours;
                    let result = estimate(&p, &table());
                    assert!(
                        result.min_reach <= result.central_reach
                            && result.central_reach <= result.max_reach,
                        "unordered bounds for {platform} initial={initial} hours={hours}: {result:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn central_reach_monotone_in_initial_shares() {
        let mut previous_reach = 0;
        let mut previous_shares = 0;
        for initial in [0, 1, 5, 10, 50, 100, 500] {
            let mut p = params();
            p.initial_shares = initial;
            let result = estimate(&p, &table());
            assert!(result.central_reach >= previous_reach);
            assert!(result.total_shares >= previous_shares);
            previous_reach = result.central_reach;
            previous_shares = result.total_shares;
        }
    }

    #[test]
    fn identical_params_yield_identical_results() {
        let p = params();
        assert_eq!(estimate(&p, &table()), estimate(&p, &table()));
    }

    #[test]
    fn unknown_platform_key_matches_whatsapp() {
        let mut p = params();
        p.platform = Platform::from_key("friendster");
        let fallback = estimate(&p, &table());

        p.platform = Platform::WhatsApp;
        assert_eq!(fallback, estimate(&p, &table()));
    }

    #[test]
    fn zero_generations_returns_seed_untouched() {
        let mut p = params();
        p.time_horizon_hours = 1; // floor(1 / 1.5) = 0
        let result = estimate(&p, &table());

        assert_eq!(result.generations, 0);
        assert_eq!(result.central_reach, 10);
        assert_eq!(result.min_reach, 10);
        assert_eq!(result.max_reach, 10);
        assert_eq!(result.total_shares, 10);
        assert_eq!(result.platform_spread, 1);
    }

    #[test]
    fn zero_generations_skips_saturation_clamp() {
        // Seed larger than any zero-generation cap product; the clamp
        // must not zero it out.
        let mut p = params();
        p.time_horizon_hours = 1;
        p.initial_shares = 5_000;
        let result = estimate(&p, &table());
        assert_eq!(result.central_reach, 5_000);
        assert_eq!(result.min_reach, 5_000);
        assert_eq!(result.max_reach, 5_000);
    }

    #[test]
    fn whatsapp_default_scenario() {
        // 24 h ⇒ 16 generations; whatsapp midpoints: rate 0.27, reach 23.
        // Cascade: 10 → 2 (shares 12, reach 56) → 0. No cap hit.
        let result = estimate(&params(), &table());

        assert_eq!(result.generations, 16);
        assert_eq!(result.central_reach, 56);
        assert_eq!(result.min_reach, 40);
        assert_eq!(result.max_reach, 100);
        assert_eq!(result.total_shares, 12);
        assert_eq!(result.platform_spread, 1);
        assert!(
            result.min_reach <= result.central_reach && result.central_reach <= result.max_reach
        );
        assert_eq!(result.viral_level, ViralLevel::Low);
        assert_eq!(result.viral_level.color_hex(), "#10b981");
    }

    #[test]
    fn tiktok_differs_from_whatsapp() {
        let whatsapp = estimate(&params(), &table());

        let mut p = params();
        p.platform = Platform::TikTok;
        let tiktok = estimate(&p, &table());

        // Direction follows from the profile tables: tiktok's far lower
        // share rate extinguishes a 10-seed cascade immediately, so no
        // hardcoded ordering — only that the profiles actually differ.
        assert_ne!(tiktok.central_reach, whatsapp.central_reach);
    }

    #[test]
    fn saturation_clamp_caps_runaway_cascades() {
        // Telegram's 0.185 midpoint rate sustains a large seed for many
        // generations; a small network must cap it.
        let mut p = params();
        p.platform = Platform::Telegram;
        p.initial_shares = 10_000;
        p.network_size = 10;
        p.time_horizon_hours = 24;
        let result = estimate(&p, &table());

        assert_eq!(result.central_reach, 10 * 16 * 2);
        assert_eq!(result.min_reach, 10 * 16);
        assert_eq!(result.max_reach, 10 * 16 * 4);
    }

    #[test]
    fn spread_steps_at_share_thresholds() {
        assert_eq!(platform_spread(0), 1);
        assert_eq!(platform_spread(49), 1);
        assert_eq!(platform_spread(50), 2);
        assert_eq!(platform_spread(199), 2);
        assert_eq!(platform_spread(200), 3);
        assert_eq!(platform_spread(499), 3);
        assert_eq!(platform_spread(500), 4);
        assert_eq!(platform_spread(999), 4);
        assert_eq!(platform_spread(1_000), 5);
        assert_eq!(platform_spread(u64::MAX), 5);
    }

    #[test]
    fn breakdown_seed_row_and_extinction() {
        let rows = breakdown(&params(), &table());

        // 10 → 2 → extinct: seed row plus one live generation.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].generation, 0);
        assert_eq!(rows[0].new_carriers, 10);
        assert_eq!(rows[1].generation, 1);
        assert_eq!(rows[1].new_carriers, 2);
        assert_eq!(rows[1].total_shares, 12);
        assert_eq!(rows[1].total_reach, 56);
    }

    #[test]
    fn breakdown_zero_generations_is_seed_only() {
        let mut p = params();
        p.time_horizon_hours = 1;
        let rows = breakdown(&p, &table());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_reach, 10);
    }

    #[test]
    fn breakdown_totals_match_estimate_before_clamp() {
        let mut p = params();
        p.initial_shares = 100;
        let rows = breakdown(&p, &table());
        let result = estimate(&p, &table());
        let last = rows.last().expect("seed row always present");
        assert_eq!(last.total_shares, result.total_shares);
        // No clamp hit at this scale, so the trace total equals the estimate.
        assert_eq!(last.total_reach, result.central_reach);
    }
}
