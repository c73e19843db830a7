//! Domain model: platforms, simulation parameters, and derived results.

pub mod params;
pub mod platform;
pub mod result;

pub use params::{
    NETWORK_SIZE_RANGE, NETWORK_SIZE_STEP, SHARE_RATE_PERCENT_MAX, TIME_HORIZON_RANGE,
    SimulationParameters,
};
pub use platform::{Platform, PlatformProfile, ProfileTable};
pub use result::{GenerationRow, SimulationResult, ViralLevel};
