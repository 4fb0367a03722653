//! Modal overlays.

mod history;

pub use history::HistoryOverlay;

use crossterm::event::KeyEvent;

use crate::state::TuiState;

/// Active modal overlay. At most one is open at a time; overlays capture
/// all key input while open.
#[derive(Debug)]
pub enum Overlay {
    History(HistoryOverlay),
}

/// What an overlay key press resolved to.
#[derive(Debug, PartialEq)]
pub enum OverlayOutcome {
    Stay,
    Close,
}

/// Routes a key to the active overlay.
pub fn handle_overlay_key(
    tui: &mut TuiState,
    overlay: &mut Overlay,
    key: KeyEvent,
) -> OverlayOutcome {
    match overlay {
        Overlay::History(state) => state.handle_key(tui, key),
    }
}
