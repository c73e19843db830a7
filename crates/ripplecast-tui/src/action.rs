//! All possible UI actions. Actions are the sole mechanism for
//! cross-component state changes.

use ripplecast_core::SimulationResult;

use crate::screen::ScreenId;

/// Every cross-cutting state transition in the TUI is expressed as an
/// Action. Control-surface edits stay local to the calculator screen;
/// it announces the outcome via [`Action::ResultUpdated`] so the app
/// shell can reflect it in the status bar.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    ToggleHelp,

    // ── Calculator ────────────────────────────────────────────────
    /// A recompute finished; carries the fresh result for the status bar.
    ResultUpdated(SimulationResult),
}
