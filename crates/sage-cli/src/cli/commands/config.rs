//! `sage config` subcommands.

use anyhow::{Context, Result};
use sage_core::config::{Config, paths};

pub fn path() {
    println!("{}", paths::config_path().display());
}

pub fn show(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render config")?;
    print!("{rendered}");
    Ok(())
}
