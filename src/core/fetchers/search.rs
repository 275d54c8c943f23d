//! Search-engine discovery base for the site scrapers
//!
//! The scraper sites share one flow: ask the search engine for
//! `"<artist> <title> <site keyword>"`, pick the first result URL that
//! belongs to the site (and survives the site's own exclusions), fetch that
//! page and run the extraction pattern over it. Concrete sites differ only
//! in identifier, pattern, search keyword and the optional URL predicate;
//! see `sites.rs`.

use async_trait::async_trait;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::core::extract::{cleanup, compile_pattern, extract_all};
use crate::core::http::{url_escape, HttpClient};
use crate::error::NetworkError;

use super::{FetchOutcome, LyricsFetcher};

/// Extra per-site URL filter, applied on top of the domain check.
pub type UrlPredicate = fn(&str) -> bool;

pub struct SearchFetcher {
    name: &'static str,
    domain: &'static str,
    pattern: Regex,
    url_ok: Option<UrlPredicate>,
    search_url: String,
}

impl SearchFetcher {
    pub fn new(
        name: &'static str,
        domain: &'static str,
        pattern: &str,
        url_ok: Option<UrlPredicate>,
        search_url: &str,
    ) -> Self {
        Self {
            name,
            domain,
            pattern: compile_pattern(pattern).expect("valid extraction pattern"),
            url_ok,
            search_url: search_url.to_string(),
        }
    }

    /// Default validity check: the URL belongs to the site. Per-site
    /// predicates narrow this further (index/tag pages match the domain but
    /// carry no lyrics).
    fn is_url_ok(&self, url: &str) -> bool {
        url.contains(self.domain) && self.url_ok.map_or(true, |ok| ok(url))
    }
}

#[async_trait]
impl LyricsFetcher for SearchFetcher {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self, http: &dyn HttpClient, artist: &str, title: &str) -> FetchOutcome {
        let query = format!("{} {} {}", artist, title, self.domain);
        let candidates = match search_candidates(http, &self.search_url, &query).await {
            Ok(candidates) => candidates,
            Err(e) => return FetchOutcome::NotFound(format!("search failed: {}", e)),
        };

        let page_url = match candidates.iter().find(|url| self.is_url_ok(url)) {
            Some(url) => url,
            None => {
                return FetchOutcome::NotFound(format!(
                    "no {} result in search page",
                    self.domain
                ))
            }
        };

        debug!("Selected result: {}", page_url);
        let page = match http.get(page_url).await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::NotFound(format!("page fetch failed: {}", e)),
        };

        match extract_lyrics(&self.pattern, &page) {
            Some(text) => FetchOutcome::Found(text),
            None => FetchOutcome::NotFound("no lyrics found on page".to_string()),
        }
    }
}

/// Run a source pattern over a page body and clean every fragment. `None`
/// when nothing matched or the matches clean down to nothing.
pub fn extract_lyrics(pattern: &Regex, body: &str) -> Option<String> {
    let fragments: Vec<String> = extract_all(pattern, body)
        .iter()
        .map(|fragment| cleanup(fragment))
        .filter(|text| !text.is_empty())
        .collect();

    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join("\n\n"))
    }
}

/// Query the search engine and return candidate result URLs in page order.
pub async fn search_candidates(
    http: &dyn HttpClient,
    search_url: &str,
    query: &str,
) -> Result<Vec<String>, NetworkError> {
    let url = search_url.replace("%q%", &url_escape(query));
    debug!("Searching: {}", url);
    let body = http.get(&url).await?;
    Ok(parse_candidates(&body))
}

/// Harvest anchor hrefs from a search results page, unwrapping the engine's
/// redirect links. Keeps only absolute http(s) URLs.
fn parse_candidates(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse("a[href]").expect("valid selector");

    document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(normalize_href)
        .collect()
}

fn normalize_href(href: &str) -> Option<String> {
    // Result links come wrapped as /url?q=<target>&... on some engines
    let href = if let Some(rest) = href.strip_prefix("/url?q=") {
        rest.split('&').next().unwrap_or(rest)
    } else {
        href
    };

    if href.starts_with("http://") || href.starts_with("https://") {
        Some(href.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::testing::StubHttpClient;

    const SEARCH_URL: &str = "https://search.example/?q=%q%";

    fn results_page(urls: &[&str]) -> String {
        let links: String = urls
            .iter()
            .map(|u| format!("<a href=\"{}\">result</a>", u))
            .collect();
        format!("<html><body>{}</body></html>", links)
    }

    #[test]
    fn candidates_unwrap_redirect_links_and_skip_relative_ones() {
        let body = results_page(&[
            "/url?q=https://site.example/song.html&sa=U",
            "/settings",
            "https://other.example/page",
        ]);
        let candidates = parse_candidates(&body);
        assert_eq!(
            candidates,
            vec!["https://site.example/song.html", "https://other.example/page"]
        );
    }

    #[tokio::test]
    async fn first_valid_non_excluded_candidate_wins() {
        fn not_a_tag_page(url: &str) -> bool {
            !url.contains("/tag/")
        }

        let search_body = results_page(&[
            "https://wrong-domain.example/lyrics",
            "https://site.example/tag/rock",
            "https://site.example/real-song.html",
        ]);
        let http = StubHttpClient::new()
            .with_body("search.example", &search_body)
            .with_body(
                "real-song.html",
                "<div class=\"lyrics\">Caught in a landslide</div>",
            );

        let fetcher = SearchFetcher::new(
            "site",
            "site.example",
            "<div class=\"lyrics\">(.*?)</div>",
            Some(not_a_tag_page),
            SEARCH_URL,
        );

        let outcome = fetcher.fetch(&http, "Queen", "Bohemian Rhapsody").await;

        assert_eq!(
            outcome,
            FetchOutcome::Found("Caught in a landslide".to_string())
        );
        let requests = http.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].contains("real-song.html"));
    }

    #[tokio::test]
    async fn no_matching_candidate_is_not_found_without_page_fetch() {
        let search_body = results_page(&["https://wrong-domain.example/lyrics"]);
        let http = StubHttpClient::new().with_body("search.example", &search_body);

        let fetcher = SearchFetcher::new(
            "site",
            "site.example",
            "<div class=\"lyrics\">(.*?)</div>",
            None,
            SEARCH_URL,
        );

        let outcome = fetcher.fetch(&http, "Queen", "Bohemian Rhapsody").await;

        assert!(matches!(outcome, FetchOutcome::NotFound(_)));
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn search_transport_failure_is_not_found() {
        let http = StubHttpClient::new().with_failure("search.example", "dns failure");
        let fetcher = SearchFetcher::new(
            "site",
            "site.example",
            "<div class=\"lyrics\">(.*?)</div>",
            None,
            SEARCH_URL,
        );

        let outcome = fetcher.fetch(&http, "Queen", "Bohemian Rhapsody").await;

        assert!(matches!(outcome, FetchOutcome::NotFound(_)));
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn pattern_miss_on_page_is_not_found() {
        let search_body = results_page(&["https://site.example/song.html"]);
        let http = StubHttpClient::new()
            .with_body("search.example", &search_body)
            .with_body("song.html", "<p>no lyrics markup here</p>");

        let fetcher = SearchFetcher::new(
            "site",
            "site.example",
            "<div class=\"lyrics\">(.*?)</div>",
            None,
            SEARCH_URL,
        );

        let outcome = fetcher.fetch(&http, "Queen", "Bohemian Rhapsody").await;

        assert!(matches!(outcome, FetchOutcome::NotFound(_)));
    }
}
