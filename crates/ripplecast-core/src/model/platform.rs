// ── Platform identities and spread profiles ──
//
// Per-platform reach and re-share characteristics, derived from published
// engagement studies. These drive the generation loop; the UI's manual
// share-rate percentage never does.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ── Platform ────────────────────────────────────────────────────────

/// Supported platform. Unknown keys resolve to [`Platform::WhatsApp`]
/// rather than failing — see [`Platform::from_key`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    #[default]
    WhatsApp,
    Twitter,
    Facebook,
    Telegram,
    TikTok,
    Instagram,
}

impl Platform {
    /// All platforms in selector order.
    pub const ALL: [Platform; 6] = [
        Self::WhatsApp,
        Self::Twitter,
        Self::Facebook,
        Self::Telegram,
        Self::TikTok,
        Self::Instagram,
    ];

    /// Lowercase key used in config files and the CLI.
    pub fn key(self) -> &'static str {
        match self {
            Self::WhatsApp => "whatsapp",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Telegram => "telegram",
            Self::TikTok => "tiktok",
            Self::Instagram => "instagram",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::Telegram => "Telegram",
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
        }
    }

    /// Resolve a key, case-insensitively. Unknown keys fall back to
    /// WhatsApp — never an error, matching the silent-substitution
    /// contract of the estimator.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    fn index(self) -> usize {
        match self {
            Self::WhatsApp => 0,
            Self::Twitter => 1,
            Self::Facebook => 2,
            Self::Telegram => 3,
            Self::TikTok => 4,
            Self::Instagram => 5,
        }
    }
}

// ── PlatformProfile ─────────────────────────────────────────────────

/// Spread characteristics for one platform.
///
/// `reach_per_share` is the number of people newly exposed per share;
/// `share_rate` the fraction of newly-reached people who re-share.
/// Both are (min, max) ranges; the estimator derives its central branch
/// from their midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub reach_per_share: (u32, u32),
    pub share_rate: (f64, f64),
}

impl PlatformProfile {
    /// Check the range invariants: `min ≤ max` on both axes, share rates
    /// within `[0, 1]`.
    pub fn validate(&self, platform: Platform) -> Result<(), CoreError> {
        let (reach_min, reach_max) = self.reach_per_share;
        if reach_min > reach_max {
            return Err(CoreError::InvalidProfile {
                platform,
                reason: format!("reach_per_share min {reach_min} exceeds max {reach_max}"),
            });
        }
        let (rate_min, rate_max) = self.share_rate;
        if !(0.0..=1.0).contains(&rate_min) || !(0.0..=1.0).contains(&rate_max) {
            return Err(CoreError::InvalidProfile {
                platform,
                reason: format!("share_rate {rate_min}..{rate_max} outside [0, 1]"),
            });
        }
        if rate_min > rate_max {
            return Err(CoreError::InvalidProfile {
                platform,
                reason: format!("share_rate min {rate_min} exceeds max {rate_max}"),
            });
        }
        Ok(())
    }
}

// ── ProfileTable ────────────────────────────────────────────────────

/// Baseline per-platform profiles, indexed by [`Platform::ALL`] order.
const BASELINE: [PlatformProfile; 6] = [
    // whatsapp
    PlatformProfile {
        reach_per_share: (15, 30),
        share_rate: (0.22, 0.32),
    },
    // twitter
    PlatformProfile {
        reach_per_share: (40, 80),
        share_rate: (0.04, 0.09),
    },
    // facebook
    PlatformProfile {
        reach_per_share: (30, 60),
        share_rate: (0.08, 0.16),
    },
    // telegram
    PlatformProfile {
        reach_per_share: (20, 40),
        share_rate: (0.15, 0.22),
    },
    // tiktok
    PlatformProfile {
        reach_per_share: (60, 150),
        share_rate: (0.02, 0.05),
    },
    // instagram
    PlatformProfile {
        reach_per_share: (20, 45),
        share_rate: (0.05, 0.12),
    },
];

/// The active profile per platform. Starts from the built-in baseline;
/// config may override individual entries through [`ProfileTable::set`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    profiles: [PlatformProfile; 6],
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self { profiles: BASELINE }
    }
}

impl ProfileTable {
    /// Profile for a platform. Total — every platform has an entry.
    pub fn get(&self, platform: Platform) -> &PlatformProfile {
        &self.profiles[platform.index()]
    }

    /// Replace a platform's profile. Rejects range-invariant violations.
    pub fn set(&mut self, platform: Platform, profile: PlatformProfile) -> Result<(), CoreError> {
        profile.validate(platform)?;
        self.profiles[platform.index()] = profile;
        Ok(())
    }

    /// Iterate `(platform, profile)` pairs in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformProfile)> {
        Platform::ALL.iter().map(|&p| (p, self.get(p)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_key_resolves_known_platforms() {
        assert_eq!(Platform::from_key("tiktok"), Platform::TikTok);
        assert_eq!(Platform::from_key("TELEGRAM"), Platform::Telegram);
        assert_eq!(Platform::from_key("WhatsApp"), Platform::WhatsApp);
    }

    #[test]
    fn from_key_falls_back_to_whatsapp() {
        assert_eq!(Platform::from_key("mastodon"), Platform::WhatsApp);
        assert_eq!(Platform::from_key(""), Platform::WhatsApp);
    }

    #[test]
    fn key_round_trips_through_from_key() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_key(platform.key()), platform);
        }
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Platform::TikTok).unwrap();
        assert_eq!(json, "\"tiktok\"");
        let back: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Platform::TikTok);
    }

    #[test]
    fn baseline_ranges_are_ordered() {
        for (platform, profile) in ProfileTable::default().iter() {
            profile.validate(platform).unwrap();
        }
    }

    #[test]
    fn set_rejects_inverted_reach_range() {
        let mut table = ProfileTable::default();
        let err = table
            .set(
                Platform::Twitter,
                PlatformProfile {
                    reach_per_share: (80, 40),
                    share_rate: (0.04, 0.09),
                },
            )
            .unwrap_err();
        assert!(err.to_string().contains("reach_per_share"));
    }

    #[test]
    fn set_rejects_out_of_unit_share_rate() {
        let mut table = ProfileTable::default();
        assert!(
            table
                .set(
                    Platform::Twitter,
                    PlatformProfile {
                        reach_per_share: (40, 80),
                        share_rate: (0.5, 1.5),
                    },
                )
                .is_err()
        );
    }

    #[test]
    fn set_applies_valid_override() {
        let mut table = ProfileTable::default();
        let custom = PlatformProfile {
            reach_per_share: (5, 10),
            share_rate: (0.1, 0.2),
        };
        table.set(Platform::Instagram, custom).unwrap();
        assert_eq!(*table.get(Platform::Instagram), custom);
        // Other entries untouched
        assert_eq!(
            table.get(Platform::WhatsApp).reach_per_share,
            (15, 30)
        );
    }
}
