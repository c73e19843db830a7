//! Explicit calculator state: parameters, active profiles, last result.
//!
//! Frontends mutate parameters through the clamping setters, call
//! [`Calculator::recompute`], and regenerate the scene — an explicit
//! update → recompute → re-render pipeline with no ambient singleton.
//! Every recompute fully supersedes the previous result.

use rand::Rng;
use tracing::debug;

use crate::estimator::{breakdown, estimate};
use crate::model::{
    GenerationRow, Platform, ProfileTable, SimulationParameters, SimulationResult,
};
use crate::scene::PropagationScene;

pub struct Calculator {
    params: SimulationParameters,
    profiles: ProfileTable,
    result: SimulationResult,
}

impl Calculator {
    pub fn new(params: SimulationParameters, profiles: ProfileTable) -> Self {
        let result = estimate(&params, &profiles);
        Self {
            params,
            profiles,
            result,
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// The result of the most recent [`recompute`](Self::recompute).
    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    // ── Parameter mutators (clamping; see model::params) ─────────────

    pub fn set_initial_shares(&mut self, value: u32) {
        self.params.set_initial_shares(value);
    }

    pub fn set_share_rate_percent(&mut self, value: u8) {
        self.params.set_share_rate_percent(value);
    }

    pub fn set_time_horizon_hours(&mut self, value: u32) {
        self.params.set_time_horizon_hours(value);
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.params.set_platform(platform);
    }

    pub fn set_network_size(&mut self, value: u32) {
        self.params.set_network_size(value);
    }

    pub fn network_size_up(&mut self) {
        self.params.network_size_up();
    }

    pub fn network_size_down(&mut self) {
        self.params.network_size_down();
    }

    // ── Pipeline ─────────────────────────────────────────────────────

    /// Run the estimator against the current parameters, replacing the
    /// stored result. Idempotent and safe to call repeatedly.
    pub fn recompute(&mut self) -> &SimulationResult {
        self.result = estimate(&self.params, &self.profiles);
        debug!(
            platform = %self.params.platform,
            central_reach = self.result.central_reach,
            viral_level = self.result.viral_level.label(),
            "recomputed estimate"
        );
        &self.result
    }

    /// Lay out a propagation scene from the stored result.
    pub fn scene(&self, width: f64, rng: &mut impl Rng) -> PropagationScene {
        PropagationScene::generate(&self.result, width, rng)
    }

    /// Per-generation central-branch trace for the current parameters.
    pub fn breakdown(&self) -> Vec<GenerationRow> {
        breakdown(&self.params, &self.profiles)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(SimulationParameters::default(), ProfileTable::default())
    }
}
