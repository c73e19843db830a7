// ── Core error types ──
//
// The estimator itself is total: every valid SimulationParameters yields a
// defined result, unknown platform keys fall back silently, and degenerate
// time horizons are edge cases rather than errors. What remains is profile
// override validation, used by the config layer.

use thiserror::Error;

use crate::model::Platform;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid profile for {platform}: {reason}")]
    InvalidProfile { platform: Platform, reason: String },
}
