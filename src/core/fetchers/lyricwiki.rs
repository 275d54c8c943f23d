//! Direct API lookup against the LyricWiki-style endpoint
//!
//! One structured query returns an XML envelope pointing at the actual
//! lyrics page; a second request fetches that page. The site serves an
//! editable placeholder page when it has no lyrics for the song, so a body
//! carrying the edit marker counts as not found even though the lookup
//! itself succeeded.

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::core::extract::{cleanup, compile_pattern, extract_all};
use crate::core::http::{url_escape, HttpClient};

use super::{FetchOutcome, LyricsFetcher};

const URL_TEMPLATE: &str =
    "https://lyrics.fandom.com/api.php?action=lyrics&fmt=xml&func=getSong&artist=%artist%&song=%title%";

/// Placeholder pages invite the visitor to add the missing lyrics.
const NOT_LYRICS_MARKER: &str = "action=edit";

pub struct LyricwikiFetcher {
    url_pattern: Regex,
}

impl LyricwikiFetcher {
    pub fn new() -> Self {
        Self {
            url_pattern: compile_pattern("<url>(.*?)</url>").expect("valid extraction pattern"),
        }
    }
}

impl Default for LyricwikiFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LyricsFetcher for LyricwikiFetcher {
    fn name(&self) -> &str {
        "lyricwiki"
    }

    async fn fetch(&self, http: &dyn HttpClient, artist: &str, title: &str) -> FetchOutcome {
        let lookup_url = URL_TEMPLATE
            .replace("%artist%", &url_escape(artist))
            .replace("%title%", &url_escape(title));

        debug!("Querying lyricwiki API: {}", lookup_url);
        let envelope = match http.get(&lookup_url).await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::NotFound(format!("API lookup failed: {}", e)),
        };

        let urls = extract_all(&self.url_pattern, &envelope);
        let page_url = match urls.first() {
            Some(url) => url,
            None => return FetchOutcome::NotFound("no lyrics page in API response".to_string()),
        };

        debug!("Fetching lyrics page: {}", page_url);
        let page = match http.get(page_url).await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::NotFound(format!("page fetch failed: {}", e)),
        };

        if page.contains(NOT_LYRICS_MARKER) {
            return FetchOutcome::NotFound("site has no lyrics for this song".to_string());
        }

        FetchOutcome::Found(cleanup(&page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::testing::StubHttpClient;

    #[tokio::test]
    async fn failed_lookup_performs_no_second_request() {
        let http = StubHttpClient::new().with_failure("api.php", "connection reset");
        let fetcher = LyricwikiFetcher::new();

        let outcome = fetcher.fetch(&http, "Queen", "Bohemian Rhapsody").await;

        assert!(matches!(outcome, FetchOutcome::NotFound(_)));
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn placeholder_page_is_not_lyrics() {
        let http = StubHttpClient::new()
            .with_body("api.php", "<url>http://example.com/lyrics</url>")
            .with_body("example.com", "Sorry! <a href=\"?action=edit\">Add these lyrics</a>");
        let fetcher = LyricwikiFetcher::new();

        let outcome = fetcher.fetch(&http, "Queen", "Bohemian Rhapsody").await;

        assert!(matches!(outcome, FetchOutcome::NotFound(_)));
        assert_eq!(http.request_count(), 2);
    }

    #[tokio::test]
    async fn success_path_is_exactly_two_round_trips() {
        let http = StubHttpClient::new()
            .with_body("api.php", "<url>http://example.com/lyrics</url>")
            .with_body("example.com", "Is this the real life...");
        let fetcher = LyricwikiFetcher::new();

        let outcome = fetcher.fetch(&http, "Queen", "Bohemian Rhapsody").await;

        assert_eq!(
            outcome,
            FetchOutcome::Found("Is this the real life...".to_string())
        );
        assert_eq!(http.request_count(), 2);
    }

    #[tokio::test]
    async fn empty_api_response_is_not_found() {
        let http = StubHttpClient::new().with_body("api.php", "<error>not found</error>");
        let fetcher = LyricwikiFetcher::new();

        let outcome = fetcher.fetch(&http, "Nobody", "Nothing").await;

        assert!(matches!(outcome, FetchOutcome::NotFound(_)));
        assert_eq!(http.request_count(), 1);
    }
}
