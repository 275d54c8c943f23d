//! Last-resort fetcher with no fixed site
//!
//! Searches for `"<artist> <title> lyrics"` and takes whatever lyrics page
//! the engine surfaces. The target domain is discovered per call and lives
//! only on the call's stack, so concurrent fetches never share state. With
//! no site-specific markup to anchor on, extraction falls back to the page
//! body and leans on cleanup to reduce it to text.

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::core::extract::compile_pattern;
use crate::core::http::HttpClient;

use super::search::{extract_lyrics, search_candidates};
use super::{FetchOutcome, LyricsFetcher};

const SITE_KEYWORD: &str = "lyrics";

/// Domains the generic search ranks highly that never carry usable lyrics
/// text (video, encyclopedias, social media) or belong to the engine itself.
const EXCLUDED_DOMAINS: &[&str] = &[
    "google.",
    "bing.",
    "duckduckgo.",
    "youtube.",
    "wikipedia.",
    "facebook.",
    "instagram.",
    "twitter.",
    "amazon.",
];

pub struct InternetFetcher {
    search_url: String,
    body_pattern: Regex,
}

impl InternetFetcher {
    pub fn new(search_url: &str) -> Self {
        Self {
            search_url: search_url.to_string(),
            body_pattern: compile_pattern("<body.*?>(.*?)</body>")
                .expect("valid extraction pattern"),
        }
    }

    fn is_url_ok(url: &str) -> bool {
        !EXCLUDED_DOMAINS.iter().any(|domain| url.contains(domain))
    }
}

#[async_trait]
impl LyricsFetcher for InternetFetcher {
    fn name(&self) -> &str {
        "internet"
    }

    async fn fetch(&self, http: &dyn HttpClient, artist: &str, title: &str) -> FetchOutcome {
        let query = format!("{} {} {}", artist, title, SITE_KEYWORD);
        let candidates = match search_candidates(http, &self.search_url, &query).await {
            Ok(candidates) => candidates,
            Err(e) => return FetchOutcome::NotFound(format!("search failed: {}", e)),
        };

        // Discovered per call, never cached on the fetcher
        let page_url = match candidates.iter().find(|url| Self::is_url_ok(url)) {
            Some(url) => url,
            None => return FetchOutcome::NotFound("no usable result in search page".to_string()),
        };

        debug!("Discovered lyrics page: {}", page_url);
        let page = match http.get(page_url).await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::NotFound(format!("page fetch failed: {}", e)),
        };

        match extract_lyrics(&self.body_pattern, &page) {
            Some(text) => FetchOutcome::Found(text),
            None => FetchOutcome::NotFound("page had no readable text".to_string()),
        }
    }
}
