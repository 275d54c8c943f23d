//! Concrete scraper sites
//!
//! Each site is a `SearchFetcher` configured with its extraction pattern
//! and, where the site's domain also hosts non-lyrics pages that rank well
//! in searches, an extra URL predicate.

use super::search::SearchFetcher;

pub fn metrolyrics(search_url: &str) -> SearchFetcher {
    SearchFetcher::new(
        "metrolyrics",
        "metrolyrics.com",
        r#"<div class="lyrics-body">(.*?)</div>"#,
        Some(is_song_page),
        search_url,
    )
}

/// Artist and tag indexes match the domain but only song pages end in .html.
fn is_song_page(url: &str) -> bool {
    url.ends_with(".html")
}

pub fn lyricsmania(search_url: &str) -> SearchFetcher {
    SearchFetcher::new(
        "lyricsmania",
        "lyricsmania.com",
        r#"<div class="lyrics-body".*?</strong>(.*?)</div>"#,
        None,
        search_url,
    )
}

pub fn sing365(search_url: &str) -> SearchFetcher {
    SearchFetcher::new(
        "sing365",
        "sing365.com",
        r"<!-Lyrics Begin->(.*?)<!-Lyrics End->",
        None,
        search_url,
    )
}

pub fn justsomelyrics(search_url: &str) -> SearchFetcher {
    SearchFetcher::new(
        "justsomelyrics",
        "justsomelyrics.com",
        r#"<div class="content.*?</div>\s*</div>(.*?)<div"#,
        None,
        search_url,
    )
}

pub fn azlyrics(search_url: &str) -> SearchFetcher {
    SearchFetcher::new(
        "azlyrics",
        "azlyrics.com",
        r#"<div class="lyricsh">.*?</h2>.*<div>(.*?)</div>"#,
        Some(is_lyrics_path),
        search_url,
    )
}

/// Only /lyrics/ paths carry songs; the domain root hosts search and charts.
fn is_lyrics_path(url: &str) -> bool {
    url.contains("/lyrics/")
}

pub fn genius(search_url: &str) -> SearchFetcher {
    SearchFetcher::new(
        "genius",
        "genius.com",
        r"<lyrics.*?>(.*?)</lyrics>",
        None,
        search_url,
    )
}

pub fn tekstowo(search_url: &str) -> SearchFetcher {
    SearchFetcher::new(
        "tekstowo",
        "tekstowo.pl",
        r#"<div class="song-text">.*?</h2>(.*?)<a"#,
        None,
        search_url,
    )
}
