//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the tick timer, and completions of async backend work delivered through
//! the runtime inbox.

use std::path::PathBuf;

use sage_core::backend::BackendError;
use sage_core::backend::types::{AuthSession, CartView, ChatResponse, OrderConfirmation};

/// Events fed through the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer tick (drives the spinner and render cadence).
    Tick,
    /// Raw terminal event (key, mouse, resize, paste).
    Terminal(crossterm::event::Event),
    /// Completed async backend work.
    Backend(BackendEvent),
}

/// Which cart mutation a `CartUpdated` event concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Added,
    Removed,
    Viewed,
}

/// Results of backend requests, delivered via the runtime inbox.
#[derive(Debug)]
pub enum BackendEvent {
    /// The agent replied (or the request failed).
    ChatCompleted {
        result: Result<ChatResponse, BackendError>,
    },
    /// A cart call finished.
    CartUpdated {
        action: CartAction,
        result: Result<CartView, String>,
    },
    /// Checkout finished.
    CheckoutCompleted {
        result: Result<OrderConfirmation, String>,
    },
    /// PDF export finished; on success carries the written file path.
    ExportCompleted { result: Result<PathBuf, String> },
    /// Login or signup finished.
    LoggedIn { result: Result<AuthSession, String> },
    /// Virtual try-on finished; on success carries the saved image path
    /// for the product it was generated for.
    TryOnCompleted {
        product_id: String,
        result: Result<PathBuf, String>,
    },
}
