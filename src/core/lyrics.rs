//! Multi-source lyrics search
//!
//! Walks the configured fetcher chain in order and stops at the first
//! source that produces text. Sources are tried one at a time on purpose:
//! first-match-wins semantics and not hammering every site at once matter
//! more than latency here. A failing source never aborts the search; its
//! reason is kept so the caller can show why each source came up empty.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::fetchers::{FetchOutcome, FetcherRegistry};
use crate::core::http::HttpClient;
use crate::error::{LyrSeekError, Result};
use crate::signal_handler::SignalHandler;

/// One lyrics request. Empty fields are legal and simply tend to fail
/// downstream.
#[derive(Debug, Clone)]
pub struct SongQuery {
    pub artist: String,
    pub title: String,
}

impl SongQuery {
    pub fn new(artist: &str, title: &str) -> Self {
        Self {
            artist: artist.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SourceFailure {
    pub source: String,
    pub reason: String,
}

/// Outcome of a whole search. Both variants carry the failures seen before
/// the search ended, so callers can always tell why earlier sources came up
/// empty.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LyricsResult {
    Found {
        source: String,
        text: String,
        failures: Vec<SourceFailure>,
    },
    NotFound {
        failures: Vec<SourceFailure>,
    },
}

/// Try each enabled source in registry order until one finds lyrics.
///
/// Cancellation is its own outcome (`LyrSeekError::Cancelled`), checked
/// between sources and raced against the in-flight fetch. It is never
/// reported as "not found".
pub async fn fetch_lyrics(
    query: &SongQuery,
    registry: &FetcherRegistry,
    http: &dyn HttpClient,
    signals: &SignalHandler,
) -> Result<LyricsResult> {
    let mut failures = Vec::new();

    for fetcher in registry.iter() {
        if signals.is_shutdown_requested() {
            return Err(LyrSeekError::Cancelled);
        }

        info!("Trying source: {}", fetcher.name());
        let outcome = tokio::select! {
            outcome = fetcher.fetch(http, &query.artist, &query.title) => outcome,
            _ = signals.cancelled() => return Err(LyrSeekError::Cancelled),
        };

        match outcome {
            FetchOutcome::Found(text) => {
                info!("Found lyrics on {}", fetcher.name());
                return Ok(LyricsResult::Found {
                    source: fetcher.name().to_string(),
                    text,
                    failures,
                });
            }
            FetchOutcome::NotFound(reason) => {
                debug!("{}: {}", fetcher.name(), reason);
                failures.push(SourceFailure {
                    source: fetcher.name().to_string(),
                    reason,
                });
            }
        }
    }

    Ok(LyricsResult::NotFound { failures })
}
