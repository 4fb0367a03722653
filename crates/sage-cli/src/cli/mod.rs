//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use sage_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "sage")]
#[command(version = "0.1")]
#[command(about = "Terminal shopping assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the backend base URL from config
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Reuse a fixed session id instead of generating one
    #[arg(long, value_name = "ID")]
    session: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Start the interactive chat (default)
    Chat,
    /// List the renderable components and their descriptions
    Components,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(backend_url) = cli.backend_url {
        config.backend_url = backend_url;
    }
    if let Some(session) = cli.session {
        config.session_id = Some(session);
    }

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => commands::chat::run(config),
        Commands::Components => {
            commands::components::run();
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Show => commands::config::show(&config),
        },
    }
}
