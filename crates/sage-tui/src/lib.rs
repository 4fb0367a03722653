//! Full-screen TUI for the sage shopping assistant.

pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use sage_core::config::Config;

use crate::features::transcript::HistoryCell;

/// Runs the interactive chat loop.
pub async fn run_interactive_chat(config: Config) -> Result<()> {
    // Chat mode requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!("Chat mode requires a terminal.");
    }

    let session_id = config.resolve_session_id();

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "sage")?;
    writeln!(err, "Backend: {}", config.backend_url)?;
    writeln!(err, "Session: {session_id}")?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config, session_id)?;
    runtime
        .state
        .tui
        .transcript
        .push_cell(HistoryCell::system(
            "Ask about products, deals, or your cart. /help lists commands.",
        ));
    runtime.run()?;

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
