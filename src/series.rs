/// NASA+ series pages, scraped in this order.
pub const SERIES_URLS: &[&str] = &[
    "https://plus.nasa.gov/series/far-out/",
    "https://plus.nasa.gov/series/our-alien-earth/",
    "https://plus.nasa.gov/series/other-worlds/",
    "https://plus.nasa.gov/series/space-out/",
    "https://plus.nasa.gov/series/nasa-explorers/",
    "https://plus.nasa.gov/series/path-to-the-pad/",
    "https://plus.nasa.gov/series/down-to-earth/",
    "https://plus.nasa.gov/series/jpl-and-the-space-age/",
    "https://plus.nasa.gov/series/sci-girls/",
    "https://plus.nasa.gov/series/elements-of-webb/",
    "https://plus.nasa.gov/series/the-traveler/",
    "https://plus.nasa.gov/series/why-with-nye/",
    "https://plus.nasa.gov/series/75-years-of-armstrong/",
    "https://plus.nasa.gov/series/high-above-down-under/",
    "https://plus.nasa.gov/series/moon-101/",
    "https://plus.nasa.gov/series/leaders-in-lidar/",
    "https://plus.nasa.gov/series/surprisingly-stem/",
    "https://plus.nasa.gov/series/mars-in-a-minute/",
    "https://plus.nasa.gov/series/space-place-in-a-snap/",
    "https://plus.nasa.gov/series/new-horizons/",
    "https://plus.nasa.gov/series/climate-tales/",
    "https://plus.nasa.gov/series/elmo-visits-nasa/",
    "https://plus.nasa.gov/series/stemonstrations/",
    "https://plus.nasa.gov/series/earth-minute/",
];

/// The worklist, optionally cut down to its first `limit` pages.
pub fn worklist(limit: Option<usize>) -> Vec<&'static str> {
    let n = limit.unwrap_or(SERIES_URLS.len()).min(SERIES_URLS.len());
    SERIES_URLS[..n].to_vec()
}
