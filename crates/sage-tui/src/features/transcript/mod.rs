//! Chat transcript: cells, scroll state, rendering.

mod cell;
mod render;
mod state;

pub use cell::HistoryCell;
pub use render::render_transcript;
pub use state::TranscriptState;
