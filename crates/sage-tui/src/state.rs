//! Application state composition.
//!
//! Top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── input: InputState           (line buffer, prompt history)
//! │   ├── transcript: TranscriptState (cells, scroll)
//! │   ├── thread: ThreadState         (messages, watcher, pending request)
//! │   ├── panel: PanelState           (panel store, selection)
//! │   ├── auth: Option<AuthSession>   (token after login)
//! │   └── focus: Focus                (input vs panel)
//! └── overlay: Option<Overlay>        (modal overlays)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can take `&mut self` and `&mut TuiState` without borrow
//! conflicts.

use sage_core::backend::types::AuthSession;
use sage_core::chat::ChatMessage;
use sage_core::config::Config;
use sage_core::watcher::MessageWatcher;

use crate::features::input::InputState;
use crate::features::panel::PanelState;
use crate::features::transcript::TranscriptState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, session_id: String) -> Self {
        Self {
            tui: TuiState::new(config, session_id),
            overlay: None,
        }
    }
}

/// Which region receives plain key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Panel,
}

/// Conversation thread state: the message sequence and its watcher.
#[derive(Debug, Default)]
pub struct ThreadState {
    /// Append-only message sequence (the watcher's input).
    pub messages: Vec<ChatMessage>,
    /// Directive extraction state.
    pub watcher: MessageWatcher,
    /// A chat request is in flight.
    pub pending: bool,
}

impl ThreadState {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// User input state.
    pub input: InputState,
    /// Transcript display state.
    pub transcript: TranscriptState,
    /// Conversation thread and watcher.
    pub thread: ThreadState,
    /// Panel store and selection.
    pub panel: PanelState,
    /// Auth session after a successful login.
    pub auth: Option<AuthSession>,
    /// Which region has key focus.
    pub focus: Focus,
    /// Client configuration.
    pub config: Config,
    /// Session id used for backend calls (cached for the status line).
    pub session_id: String,
    /// Spinner animation frame counter (pending requests).
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: Config, session_id: String) -> Self {
        Self {
            should_quit: false,
            input: InputState::new(),
            transcript: TranscriptState::new(),
            thread: ThreadState::default(),
            panel: PanelState::new(),
            auth: None,
            focus: Focus::Input,
            config,
            session_id,
            spinner_frame: 0,
        }
    }
}
