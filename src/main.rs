use clap::{Parser, Subcommand};

mod cli;
mod config;
mod core;
mod error;
mod signal_handler;
mod utils;

use config::Config;
use error::Result;

#[derive(Parser)]
#[command(name = "lyrseek")]
#[command(about = "Command-line utility for fetching song lyrics from multiple web sources")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch lyrics for an artist and title
    Fetch(cli::fetch::FetchArgs),

    /// List known lyrics sources and their priority
    Sources(cli::sources::SourcesArgs),

    /// Show configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    utils::logging::init_logging(cli.verbose).map_err(error::LyrSeekError::Internal)?;

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Fetch(args) => cli::fetch::execute(args, &config)
            .await
            .map_err(error::LyrSeekError::Internal),
        Commands::Sources(args) => cli::sources::execute(args, &config)
            .await
            .map_err(error::LyrSeekError::Internal),
        Commands::Config(args) => cli::config::execute(args, &config)
            .await
            .map_err(error::LyrSeekError::Internal),
    }
}
