//! Interactive chat command.

use anyhow::{Context, Result};
use sage_core::config::Config;
use tracing::info;

pub fn run(config: Config) -> Result<()> {
    // Diagnostics go to a file; the TUI owns the terminal.
    let _guard = sage_core::logging::init()?;
    info!(backend = %config.backend_url, "starting chat");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;
    runtime.block_on(sage_tui::run_interactive_chat(config))
}
