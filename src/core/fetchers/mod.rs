//! Lyrics source strategies
//!
//! Each source implements `LyricsFetcher`: given artist and title, it either
//! produces cleaned lyrics text or reports why it could not. Two families
//! exist: the direct API lookup (`lyricwiki`) and the search-engine
//! discovery scrapers (`search`/`sites`, plus the dynamic-domain `internet`
//! variant). The registry assembles an ordered chain of them from the
//! configured source names.

pub mod internet;
pub mod lyricwiki;
pub mod search;
pub mod sites;

use async_trait::async_trait;
use tracing::warn;

use crate::core::http::HttpClient;

/// Result of a single source attempt. `NotFound` carries the reason for
/// diagnostics; a source never surfaces a hard error to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(String),
    NotFound(String),
}

#[async_trait]
pub trait LyricsFetcher: Send + Sync {
    /// Identifier, used both for display and registry lookup.
    fn name(&self) -> &str;

    async fn fetch(&self, http: &dyn HttpClient, artist: &str, title: &str) -> FetchOutcome;
}

/// Every source identifier this build knows, in default priority order.
/// The direct API goes first (cheapest, most precise); the generic internet
/// fallback goes last.
pub const KNOWN_SOURCES: &[&str] = &[
    "lyricwiki",
    "azlyrics",
    "genius",
    "metrolyrics",
    "lyricsmania",
    "sing365",
    "justsomelyrics",
    "tekstowo",
    "internet",
];

pub fn default_sources() -> Vec<String> {
    KNOWN_SOURCES.iter().map(|s| s.to_string()).collect()
}

fn build_fetcher(name: &str, search_url: &str) -> Option<Box<dyn LyricsFetcher>> {
    match name {
        "lyricwiki" => Some(Box::new(lyricwiki::LyricwikiFetcher::new())),
        "azlyrics" => Some(Box::new(sites::azlyrics(search_url))),
        "genius" => Some(Box::new(sites::genius(search_url))),
        "metrolyrics" => Some(Box::new(sites::metrolyrics(search_url))),
        "lyricsmania" => Some(Box::new(sites::lyricsmania(search_url))),
        "sing365" => Some(Box::new(sites::sing365(search_url))),
        "justsomelyrics" => Some(Box::new(sites::justsomelyrics(search_url))),
        "tekstowo" => Some(Box::new(sites::tekstowo(search_url))),
        "internet" => Some(Box::new(internet::InternetFetcher::new(search_url))),
        _ => None,
    }
}

/// Ordered chain of enabled fetchers. Built once from configuration and
/// read-only afterwards.
pub struct FetcherRegistry {
    fetchers: Vec<Box<dyn LyricsFetcher>>,
}

impl FetcherRegistry {
    /// Map configured names to fetcher instances, preserving order.
    /// Unrecognized names are dropped, not an error.
    pub fn from_names<S: AsRef<str>>(names: &[S], search_url: &str) -> Self {
        let mut fetchers = Vec::new();
        for name in names {
            match build_fetcher(name.as_ref(), search_url) {
                Some(fetcher) => fetchers.push(fetcher),
                None => warn!("Ignoring unknown lyrics source: {}", name.as_ref()),
            }
        }
        Self { fetchers }
    }

    #[cfg(test)]
    pub fn from_fetchers(fetchers: Vec<Box<dyn LyricsFetcher>>) -> Self {
        Self { fetchers }
    }

    /// First fetcher with the given identifier, if enabled.
    pub fn lookup(&self, name: &str) -> Option<&dyn LyricsFetcher> {
        self.fetchers
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn LyricsFetcher> {
        self.fetchers.iter().map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fetchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fetchers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_URL: &str = "https://search.example/?q=%q%";

    #[test]
    fn registry_drops_unrecognized_names_keeping_order() {
        let names = ["azlyrics", "bogus-site", "genius", "also-bogus", "internet"];
        let registry = FetcherRegistry::from_names(&names, SEARCH_URL);

        assert_eq!(registry.len(), 3);
        let order: Vec<&str> = registry.iter().map(|f| f.name()).collect();
        assert_eq!(order, vec!["azlyrics", "genius", "internet"]);
    }

    #[test]
    fn registry_lookup_finds_enabled_fetcher() {
        let registry = FetcherRegistry::from_names(&["genius", "tekstowo"], SEARCH_URL);
        assert_eq!(registry.lookup("tekstowo").map(|f| f.name()), Some("tekstowo"));
        assert!(registry.lookup("azlyrics").is_none());
    }

    #[test]
    fn every_known_source_builds() {
        let registry = FetcherRegistry::from_names(KNOWN_SOURCES, SEARCH_URL);
        assert_eq!(registry.len(), KNOWN_SOURCES.len());
    }
}
