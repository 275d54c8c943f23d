use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config as AppConfig;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

pub async fn execute(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            println!("Current configuration:");
            println!("  sources: {}", config.sources.join(", "));
            println!("  search_url: {}", config.search_url);
            println!("  user_agent: {}", config.user_agent);
            println!("  timeout_seconds: {}", config.timeout_seconds);
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path()?.display());
        }
    }

    Ok(())
}
