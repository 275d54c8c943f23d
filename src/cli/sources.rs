use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::core::fetchers::{FetcherRegistry, KNOWN_SOURCES};

#[derive(Args)]
pub struct SourcesArgs {
    /// Show only the enabled sources
    #[arg(long)]
    enabled: bool,
}

pub async fn execute(args: SourcesArgs, config: &Config) -> Result<()> {
    let registry = FetcherRegistry::from_names(&config.sources, &config.search_url);

    println!("Lyrics sources (in priority order):");
    for (index, name) in config.sources.iter().enumerate() {
        if registry.lookup(name).is_some() {
            println!("  {}. {}", index + 1, name);
        } else {
            println!("  {}. {} (unknown, ignored)", index + 1, name);
        }
    }

    if !args.enabled {
        let disabled: Vec<&str> = KNOWN_SOURCES
            .iter()
            .copied()
            .filter(|name| registry.lookup(name).is_none())
            .collect();
        if !disabled.is_empty() {
            println!("\nDisabled sources:");
            for name in disabled {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
