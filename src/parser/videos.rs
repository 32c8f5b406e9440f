use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{normalize_url, VIDEO_MARKER};

/// Scanned in order; earlier patterns win when two of them yield the same URL.
static VIDEO_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Absolute links into the video path space
        r#"(?i)href="(https://plus\.nasa\.gov/video/[^"]+)""#,
        // Site-relative links into the video path space
        r#"(?i)href="(/video/[^"]+)""#,
        // Any anchor mentioning "video" in its target
        r#"(?i)<a[^>]+href="([^"]*video[^"]*)""#,
        // Embedded player attributes
        r#"(?i)data-video-url="([^"]+)""#,
        r#"(?i)video-link="([^"]+)""#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Collect every distinct video URL in first-seen order.
///
/// Never returns an empty list: a page without any recognizable video link is
/// reported as its own video reference.
pub fn extract(markup: &str, page_url: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for re in VIDEO_PATTERNS.iter() {
        for caps in re.captures_iter(markup) {
            let url = normalize_url(&caps[1]);
            if !url.contains(VIDEO_MARKER) || seen.contains(&url) {
                continue;
            }
            seen.insert(url.clone());
            links.push(url);
        }
    }

    if links.is_empty() {
        links.push(page_url.to_string());
    }
    links
}
