// ── Derived simulation output ──

use serde::{Deserialize, Serialize};

// ── ViralLevel ──────────────────────────────────────────────────────

/// Coarse classification of the central reach estimate.
///
/// Thresholds ascend and the last match wins: `≤ 400` Low, `> 400`
/// Medium, `> 2500` High, `> 12000` Critical. Each level carries a fixed
/// display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViralLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ViralLevel {
    /// Classify a central reach value.
    pub fn classify(central_reach: u64) -> Self {
        if central_reach > 12_000 {
            Self::Critical
        } else if central_reach > 2_500 {
            Self::High
        } else if central_reach > 400 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Display color as a `#rrggbb` hex string.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Low => "#10b981",
            Self::Medium => "#fbbf24",
            Self::High => "#f59e0b",
            Self::Critical => "#e94560",
        }
    }

    /// Display color as an RGB triple.
    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Low => (0x10, 0xb9, 0x81),
            Self::Medium => (0xfb, 0xbf, 0x24),
            Self::High => (0xf5, 0x9e, 0x0b),
            Self::Critical => (0xe9, 0x45, 0x60),
        }
    }
}

// ── SimulationResult ────────────────────────────────────────────────

/// Output of one estimator run. Recomputed wholesale on every parameter
/// change; no history is retained across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// People reached, central branch (midpoint platform parameters).
    pub central_reach: u64,
    /// People reached, floor branch.
    pub min_reach: u64,
    /// People reached, ceiling branch.
    pub max_reach: u64,
    /// Cumulative shares, central branch only.
    pub total_shares: u64,
    /// Estimated number of distinct platforms the content has leaked to.
    pub platform_spread: u8,
    pub viral_level: ViralLevel,
    /// Generation count the run used; the renderer needs it for ring layout.
    pub generations: u32,
}

// ── GenerationRow ───────────────────────────────────────────────────

/// One generation of the central branch, for the breakdown view.
/// Cumulative columns are pre-clamp: the raw cascade, not the capped
/// estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRow {
    pub generation: u32,
    /// Carriers newly re-sharing in this generation.
    pub new_carriers: u64,
    pub total_shares: u64,
    pub total_reach: u64,
}
