use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::core::fetchers::FetcherRegistry;
use crate::core::lyrics::{fetch_lyrics, LyricsResult, SongQuery};
use crate::signal_handler::SignalHandler;

#[derive(Args)]
pub struct FetchArgs {
    /// Artist name
    #[arg(value_name = "ARTIST")]
    artist: String,

    /// Song title
    #[arg(value_name = "TITLE")]
    title: String,

    /// Try only these sources, in the given order (repeatable)
    #[arg(short, long = "source", value_name = "ID")]
    sources: Vec<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,
}

pub async fn execute(args: FetchArgs, config: &Config) -> Result<()> {
    let source_names = if args.sources.is_empty() {
        config.sources.clone()
    } else {
        args.sources.clone()
    };

    let registry = FetcherRegistry::from_names(&source_names, &config.search_url);
    if registry.is_empty() {
        anyhow::bail!("No recognized lyrics sources configured");
    }

    let http = config.create_http_client();
    let signals = SignalHandler::new();
    let monitor = signals.start_signal_monitoring();

    info!(
        "🔍 Searching lyrics for: {} - {} ({} sources)",
        args.artist,
        args.title,
        registry.len()
    );
    let query = SongQuery::new(&args.artist, &args.title);
    let result = fetch_lyrics(&query, &registry, &http, &signals).await?;

    monitor.abort();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        LyricsResult::Found {
            source,
            text,
            failures,
        } => {
            if !failures.is_empty() {
                info!("{} source(s) failed before {}", failures.len(), source);
            }
            println!("✅ Lyrics found on {}\n", source);
            println!("{}", text);
        }
        LyricsResult::NotFound { failures } => {
            println!("❌ No lyrics found for: {} - {}", args.artist, args.title);
            for failure in failures {
                println!("  {}: {}", failure.source, failure.reason);
            }
        }
    }

    Ok(())
}
