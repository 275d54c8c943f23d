//! Pattern-based text extraction and HTML cleanup
//!
//! Every lyrics source embeds the interesting text inside arbitrary
//! surrounding markup. A source describes the region it cares about with a
//! regex carrying a single capture group; the shared `cleanup` pass then
//! strips tags, decodes the common entities and normalizes whitespace so
//! the per-source code never deals with HTML itself.

use std::sync::OnceLock;

use regex::Regex;

/// Compile a source extraction pattern. Matching is case-insensitive and the
/// wildcard portions span newlines, since lyrics regions routinely do.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?is){}", pattern))
}

/// Return every fragment captured by `pattern` in `body`. An empty vec means
/// "no match" and is never an error.
pub fn extract_all(pattern: &Regex, body: &str) -> Vec<String> {
    pattern
        .captures_iter(body)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

fn br_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("valid br pattern"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag pattern"))
}

fn space_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").expect("valid whitespace pattern"))
}

/// Strip HTML tags, decode the fixed entity set and collapse whitespace.
///
/// `<br>` variants become line breaks before tags are dropped, so verse
/// structure survives. Applied to every matched fragment before it is
/// considered final output.
pub fn cleanup(text: &str) -> String {
    let text = br_re().replace_all(text, "\n");
    let text = tag_re().replace_all(&text, "");

    // &amp; is decoded last so it cannot cascade into the other entities
    let text = text
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = false;
    for raw_line in text.lines() {
        let line = space_run_re().replace_all(raw_line, " ");
        let line = line.trim();
        if line.is_empty() {
            if !previous_blank && !lines.is_empty() {
                lines.push(String::new());
            }
            previous_blank = true;
        } else {
            lines.push(line.to_string());
            previous_blank = false;
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
