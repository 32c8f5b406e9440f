pub mod records;
pub mod thumbnails;
pub mod videos;

use crate::output::LinkRecord;

pub use records::{page_fallback, synthesize_thumbnail};

pub const SITE_SCHEME: &str = "https";
pub const SITE_ORIGIN: &str = "https://plus.nasa.gov";
pub const VIDEO_MARKER: &str = "plus.nasa.gov/video/";
pub const THUMBNAIL_ROOT: &str = "https://plus.nasa.gov/thumbnails";
pub const THUMBNAIL_EXTENSIONS: &[&str] = &[".jpg", ".png", ".jpeg", ".webp"];

/// Two scans over the same markup, then positional pairing.
pub fn process_page(markup: &str, page_url: &str) -> Vec<LinkRecord> {
    let videos = videos::extract(markup, page_url);
    let thumbs = thumbnails::extract(markup);
    records::pair(&videos, &thumbs)
}

/// Resolve site-relative references against the site origin; leave anything
/// else untouched. Characters are kept as written so that absolute and
/// relative spellings of one link compare equal.
pub fn normalize_url(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("//") {
        format!("{}://{}", SITE_SCHEME, rest)
    } else if raw.starts_with('/') {
        format!("{}{}", SITE_ORIGIN, raw)
    } else {
        raw.to_string()
    }
}

// ── Tests ──
