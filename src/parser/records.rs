use crate::output::LinkRecord;

use super::THUMBNAIL_ROOT;

/// Pair videos with thumbnails by list position.
///
/// Videos without a thumbnail at the same index get a synthesized one;
/// surplus thumbnails are dropped.
pub fn pair(videos: &[String], thumbnails: &[String]) -> Vec<LinkRecord> {
    videos
        .iter()
        .enumerate()
        .map(|(i, video)| LinkRecord {
            video_link: video.clone(),
            thumbnail_link: thumbnails
                .get(i)
                .cloned()
                .unwrap_or_else(|| synthesize_thumbnail(video)),
        })
        .collect()
}

/// Canonical thumbnail URL for a video: `<thumbnail root>/<last path segment>.jpg`.
pub fn synthesize_thumbnail(video_link: &str) -> String {
    let slug = video_link
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    format!("{}/{}.jpg", THUMBNAIL_ROOT, slug)
}

/// Record standing in for a page that produced nothing.
pub fn page_fallback(page_url: &str) -> LinkRecord {
    LinkRecord {
        video_link: page_url.to_string(),
        thumbnail_link: synthesize_thumbnail(page_url),
    }
}
