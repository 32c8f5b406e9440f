use std::sync::LazyLock;

use regex::Regex;

use super::{normalize_url, THUMBNAIL_EXTENSIONS};

static THUMBNAIL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"(?i)<img[^>]+src="([^"]*thumb[^"]*)""#,
        r#"(?i)<img[^>]+src="([^"]*preview[^"]*)""#,
        r#"(?i)<img[^>]+src="([^"]*\.jpg[^"]*)""#,
        r#"(?i)<img[^>]+src="([^"]*\.png[^"]*)""#,
        r#"(?i)data-thumbnail="([^"]+)""#,
        r#"(?i)poster="([^"]+)""#,
        r#"(?i)background-image:\s*url\(['"]?([^'")]+)['"]?\)"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Collect image URLs in pattern order, then document order.
///
/// An image matched by more than one pattern is listed once per match.
pub fn extract(markup: &str) -> Vec<String> {
    let mut thumbs = Vec::new();

    for re in THUMBNAIL_PATTERNS.iter() {
        for caps in re.captures_iter(markup) {
            let url = normalize_url(&caps[1]);
            if has_image_extension(&url) {
                thumbs.push(url);
            }
        }
    }

    thumbs
}

fn has_image_extension(url: &str) -> bool {
    let lower = url.to_lowercase();
    THUMBNAIL_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}
