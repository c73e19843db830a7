// ── Simulation input state ──
//
// Every mutation goes through clamping setters: a SimulationParameters in
// hand is always valid, so the estimator itself never validates.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::platform::Platform;

/// Contact-network size bounds, stepped in increments of 10.
pub const NETWORK_SIZE_RANGE: RangeInclusive<u32> = 10..=10_000;

/// Increment for the network-size stepper.
pub const NETWORK_SIZE_STEP: u32 = 10;

/// Time-horizon slider bounds in hours.
pub const TIME_HORIZON_RANGE: RangeInclusive<u32> = 1..=72;

/// Upper bound of the display-only share-rate percentage.
pub const SHARE_RATE_PERCENT_MAX: u8 = 100;

/// Hours per re-share generation. A 24 h horizon yields 16 generations.
const HOURS_PER_GENERATION_NUM: u32 = 3;
const HOURS_PER_GENERATION_DEN: u32 = 2;

/// Mutable input state for the estimator.
///
/// `share_rate_percent` is display-only: it feeds the on-screen "assumed
/// average" label and nothing else. The generation loop always uses
/// platform-profile rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub initial_shares: u32,
    pub share_rate_percent: u8,
    pub time_horizon_hours: u32,
    pub platform: Platform,
    pub network_size: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_shares: 10,
            share_rate_percent: 20,
            time_horizon_hours: 24,
            platform: Platform::WhatsApp,
            network_size: 200,
        }
    }
}

impl SimulationParameters {
    /// Number of discrete re-share generations the time horizon allows:
    /// `floor(hours / 1.5)`, computed in integer arithmetic.
    pub fn generations(&self) -> u32 {
        let gens = u64::from(self.time_horizon_hours) * u64::from(HOURS_PER_GENERATION_DEN)
            / u64::from(HOURS_PER_GENERATION_NUM);
        u32::try_from(gens).unwrap_or(u32::MAX)
    }

    pub fn set_initial_shares(&mut self, value: u32) {
        self.initial_shares = value;
    }

    /// Clamps to `[0, 100]`.
    pub fn set_share_rate_percent(&mut self, value: u8) {
        self.share_rate_percent = value.min(SHARE_RATE_PERCENT_MAX);
    }

    /// Clamps to at least one hour.
    pub fn set_time_horizon_hours(&mut self, value: u32) {
        self.time_horizon_hours = value.max(*TIME_HORIZON_RANGE.start());
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    /// Clamps into [`NETWORK_SIZE_RANGE`] and snaps to the stepper grid.
    pub fn set_network_size(&mut self, value: u32) {
        let snapped = value / NETWORK_SIZE_STEP * NETWORK_SIZE_STEP;
        self.network_size = snapped.clamp(*NETWORK_SIZE_RANGE.start(), *NETWORK_SIZE_RANGE.end());
    }

    /// One stepper increment up, saturating at the range ceiling.
    pub fn network_size_up(&mut self) {
        self.network_size =
            (self.network_size + NETWORK_SIZE_STEP).min(*NETWORK_SIZE_RANGE.end());
    }

    /// One stepper increment down, saturating at the range floor.
    pub fn network_size_down(&mut self) {
        self.network_size = self
            .network_size
            .saturating_sub(NETWORK_SIZE_STEP)
            .max(*NETWORK_SIZE_RANGE.start());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_original_starting_state() {
        let params = SimulationParameters::default();
        assert_eq!(params.initial_shares, 10);
        assert_eq!(params.share_rate_percent, 20);
        assert_eq!(params.time_horizon_hours, 24);
        assert_eq!(params.platform, Platform::WhatsApp);
        assert_eq!(params.network_size, 200);
    }

    #[test]
    fn generations_floor_at_ninety_minute_intervals() {
        let mut params = SimulationParameters::default();
        assert_eq!(params.generations(), 16); // 24 h

        params.time_horizon_hours = 1;
        assert_eq!(params.generations(), 0);

        params.time_horizon_hours = 2;
        assert_eq!(params.generations(), 1);

        params.time_horizon_hours = 3;
        assert_eq!(params.generations(), 2);

        params.time_horizon_hours = 5;
        assert_eq!(params.generations(), 3);
    }

    #[test]
    fn share_rate_percent_clamps_to_hundred() {
        let mut params = SimulationParameters::default();
        params.set_share_rate_percent(250);
        assert_eq!(params.share_rate_percent, 100);
    }

    #[test]
    fn time_horizon_clamps_to_one_hour_floor() {
        let mut params = SimulationParameters::default();
        params.set_time_horizon_hours(0);
        assert_eq!(params.time_horizon_hours, 1);
    }

    #[test]
    fn network_size_snaps_and_clamps() {
        let mut params = SimulationParameters::default();

        params.set_network_size(237);
        assert_eq!(params.network_size, 230);

        params.set_network_size(3);
        assert_eq!(params.network_size, 10);

        params.set_network_size(999_999);
        assert_eq!(params.network_size, 10_000);
    }

    #[test]
    fn network_stepper_saturates_at_bounds() {
        let mut params = SimulationParameters::default();

        params.set_network_size(10_000);
        params.network_size_up();
        assert_eq!(params.network_size, 10_000);

        params.set_network_size(10);
        params.network_size_down();
        assert_eq!(params.network_size, 10);

        params.network_size_up();
        assert_eq!(params.network_size, 20);
        params.network_size_down();
        assert_eq!(params.network_size, 10);
    }
}
