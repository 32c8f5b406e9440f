use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "nasa_plus_scraped_data.json";

/// One extracted video with its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub video_link: String,
    pub thumbnail_link: String,
}

/// Everything a run produced, in page order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SeriesReport {
    pub series: Vec<LinkRecord>,
}

impl SeriesReport {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

pub fn save_report(path: &Path, report: &SeriesReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn load_report(path: &Path) -> Result<SeriesReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let report = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a series report", path.display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(video: &str, thumb: &str) -> LinkRecord {
        LinkRecord {
            video_link: video.to_string(),
            thumbnail_link: thumb.to_string(),
        }
    }

    #[test]
    fn saved_report_is_indented_under_series_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        let report = SeriesReport {
            series: vec![record(
                "https://plus.nasa.gov/video/far-out-mars/",
                "https://plus.nasa.gov/thumbnails/far-out-mars.jpg",
            )],
        };

        save_report(&path, &report).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"series\": [\n"));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value["series"][0]["video_link"],
            "https://plus.nasa.gov/video/far-out-mars/"
        );
        assert_eq!(
            value["series"][0]["thumbnail_link"],
            "https://plus.nasa.gov/thumbnails/far-out-mars.jpg"
        );
    }

    #[test]
    fn load_reads_back_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = SeriesReport {
            series: vec![
                record("https://plus.nasa.gov/video/a/", "https://img.example/a.png"),
                record("https://plus.nasa.gov/video/b/", "https://plus.nasa.gov/thumbnails/b.jpg"),
            ],
        };
        save_report(&path, &report).unwrap();

        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded.series, report.series);
    }

    #[test]
    fn non_ascii_is_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = SeriesReport {
            series: vec![record(
                "https://plus.nasa.gov/video/café/",
                "https://plus.nasa.gov/thumbnails/café.jpg",
            )],
        };
        save_report(&path, &report).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("café"));
    }

    #[test]
    fn load_rejects_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"videos": []}"#).unwrap();
        assert!(load_report(&path).is_err());
    }
}
