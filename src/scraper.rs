use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::FirecrawlConfig;
use crate::output::SeriesReport;
use crate::parser;

const INCLUDE_TAGS: [&str; 3] = ["img", "video", "a"];
const EXCLUDE_TAGS: [&str; 2] = ["script", "style"];
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Page content as returned by the scraping service.
#[derive(Debug, Clone, Default)]
pub struct RawContent {
    /// Rendered HTML.
    pub markup: String,
    /// Simplified markdown rendering.
    pub text: String,
}

impl RawContent {
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.text.is_empty()
    }
}

/// Source of page content. `None` means the page could not be fetched; a
/// fetcher never fails in any other way.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<RawContent>;
}

/// Scrape stats returned after completion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrapeStats {
    pub pages: usize,
    pub fetched: usize,
    pub failed: usize,
    pub records: usize,
    pub fallbacks: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'static str; 2],
    include_tags: [&'static str; 3],
    exclude_tags: [&'static str; 2],
    wait_for: u64,
    timeout: u64,
}

#[derive(Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    success: bool,
    data: Option<ScrapeData>,
    error: Option<String>,
}

#[derive(Deserialize, Default)]
struct ScrapeData {
    html: Option<String>,
    markdown: Option<String>,
}

pub struct FirecrawlClient {
    client: reqwest::Client,
    config: FirecrawlConfig,
}

impl FirecrawlClient {
    pub fn new(config: FirecrawlConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, config })
    }

    async fn scrape(&self, url: &str) -> Result<Option<RawContent>> {
        let body = ScrapeRequest {
            url,
            formats: ["markdown", "html"],
            include_tags: INCLUDE_TAGS,
            exclude_tags: EXCLUDE_TAGS,
            wait_for: self.config.wait_for.as_millis() as u64,
            timeout: self.config.page_timeout.as_millis() as u64,
        };

        let start = Instant::now();
        let response = self
            .client
            .post(format!("{}/scrape", self.config.api_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("{} - {}", status, truncate(text.trim(), MAX_ERROR_BODY_CHARS));
        }

        let parsed: ScrapeResponse = response
            .json()
            .await
            .context("Undecodable Firecrawl response")?;
        if !parsed.success {
            bail!(
                "Firecrawl reported failure: {}",
                parsed.error.as_deref().unwrap_or("no error message")
            );
        }

        let data = parsed.data.unwrap_or_default();
        let raw = RawContent {
            markup: data.html.unwrap_or_default(),
            text: data.markdown.unwrap_or_default(),
        };
        debug!(
            "Scraped {} in {}ms ({} bytes html, {} bytes markdown)",
            url,
            start.elapsed().as_millis(),
            raw.markup.len(),
            raw.text.len()
        );

        Ok((!raw.is_empty()).then_some(raw))
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

#[async_trait]
impl Fetcher for FirecrawlClient {
    async fn fetch(&self, url: &str) -> Option<RawContent> {
        match self.scrape(url).await {
            Ok(Some(raw)) => {
                info!("Successfully scraped: {}", url);
                Some(raw)
            }
            Ok(None) => {
                warn!("Empty content for {}", url);
                None
            }
            Err(e) => {
                warn!("Error scraping {}: {:#}", url, e);
                None
            }
        }
    }
}

/// Visit every page once, in order, and collect its records.
///
/// Pages that yield nothing contribute a single fallback record, so the
/// report always holds at least one record per page. `delay` is slept between
/// pages, not after the last one.
pub async fn scrape_series<F>(
    fetcher: &F,
    pages: &[&str],
    delay: Duration,
) -> Result<(SeriesReport, ScrapeStats)>
where
    F: Fetcher + ?Sized,
{
    let total = pages.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {wide_msg}")?
            .progress_chars("=> "),
    );

    let mut report = SeriesReport::default();
    let mut stats = ScrapeStats {
        pages: total,
        ..Default::default()
    };

    for (i, &page) in pages.iter().enumerate() {
        pb.set_message(page.to_string());
        info!("[{}/{}] Processing: {}", i + 1, total, page);

        let records = match fetcher.fetch(page).await {
            Some(raw) => {
                stats.fetched += 1;
                parser::process_page(&raw.markup, page)
            }
            None => {
                stats.failed += 1;
                Vec::new()
            }
        };

        if records.is_empty() {
            warn!("No videos found on {}, adding series URL as fallback", page);
            stats.fallbacks += 1;
            report.series.push(parser::page_fallback(page));
        } else {
            info!("Found {} videos on {}", records.len(), page);
            report.series.extend(records);
        }
        pb.inc(1);

        if i + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pb.finish_and_clear();
    stats.records = report.len();
    info!(
        "Scraped {} pages ({} ok, {} errors), {} records",
        stats.pages, stats.fetched, stats.failed, stats.records
    );

    Ok((report, stats))
}
