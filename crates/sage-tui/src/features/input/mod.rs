//! User input: line buffer, history recall, slash commands.

mod commands;
mod render;
mod state;
mod update;

pub use commands::{Command, HELP};
pub use render::render_input;
pub use state::InputState;
pub use update::{Submission, handle_key};
