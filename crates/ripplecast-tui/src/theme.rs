//! Palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

use ripplecast_core::ViralLevel;

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

/// Scene accent: propagation rings.
pub const RING_BASE: (u8, u8, u8) = (233, 69, 96); // #e94560
/// Scene accent: terminal nodes and their connectors.
pub const NODE_AMBER: (u8, u8, u8) = (251, 191, 36); // #fbbf24

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(NEON_CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

// ── Domain colors ─────────────────────────────────────────────────────

/// Terminal color for a virality level — 1:1 with the core hex values.
pub fn viral_color(level: ViralLevel) -> Color {
    let (r, g, b) = level.color_rgb();
    Color::Rgb(r, g, b)
}

/// Approximate an alpha blend by fading a color toward the dark
/// background. `opacity` is clamped to 0–1.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn fade(rgb: (u8, u8, u8), opacity: f64) -> Color {
    const BG: (u8, u8, u8) = (30, 31, 41);
    let t = opacity.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| -> u8 { (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8 };
    Color::Rgb(lerp(BG.0, rgb.0), lerp(BG.1, rgb.1), lerp(BG.2, rgb.2))
}
