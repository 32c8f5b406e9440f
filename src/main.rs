mod config;
mod output;
mod parser;
mod scraper;
mod series;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::FirecrawlConfig;
use crate::output::{LinkRecord, SeriesReport};

#[derive(Parser)]
#[command(name = "nasa_plus_scraper", about = "NASA+ series video scraper via Firecrawl")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every series page and write the video report
    Run {
        /// Only scrape the first N series pages
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Where to write the JSON report
        #[arg(short = 'o', long = "output", default_value = output::DEFAULT_OUTPUT_PATH)]
        output_path: PathBuf,
        /// Pause between pages, in milliseconds
        #[arg(long, default_value_t = config::DEFAULT_DELAY_MS)]
        delay_ms: u64,
        /// How long Firecrawl waits for the page to settle, in milliseconds
        #[arg(long, default_value_t = config::DEFAULT_WAIT_FOR_MS)]
        wait_for_ms: u64,
        /// Firecrawl per-page timeout, in milliseconds
        #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_MS)]
        timeout_ms: u64,
        /// Firecrawl API base url
        #[arg(long, env = "FIRECRAWL_API_URL", default_value = config::DEFAULT_API_URL)]
        api_url: String,
        /// Firecrawl API key
        #[arg(long, env = "FIRECRAWL_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
    /// List the series pages that get scraped
    Series,
    /// Run the extractor over a saved HTML page
    Extract {
        /// Series URL the HTML was captured from
        #[arg(short, long)]
        page: String,
        /// Path to the saved HTML
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Print records from a saved report
    Show {
        #[arg(short, long, default_value = output::DEFAULT_OUTPUT_PATH)]
        input: PathBuf,
        /// Max records to display
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            limit,
            output_path,
            delay_ms,
            wait_for_ms,
            timeout_ms,
            api_url,
            api_key,
        } => {
            // Config problems stop the run before any request goes out.
            let config = FirecrawlConfig::new(api_key.as_deref(), &api_url)?
                .with_wait_for(Duration::from_millis(wait_for_ms))
                .with_page_timeout(Duration::from_millis(timeout_ms));
            let client = scraper::FirecrawlClient::new(config)?;

            let pages = series::worklist(limit);
            println!("Scraping {} NASA+ series pages via Firecrawl...", pages.len());
            let (report, stats) =
                scraper::scrape_series(&client, &pages, Duration::from_millis(delay_ms)).await?;

            output::save_report(&output_path, &report)?;
            println!(
                "Done: {} pages ({} ok, {} errors, {} fallbacks).",
                stats.pages, stats.fetched, stats.failed, stats.fallbacks
            );
            println!("Saved {} records to {}", stats.records, output_path.display());

            println!("\nSample results:");
            print_records(&report.series, 3);
            Ok(())
        }
        Commands::Series => {
            for (i, url) in series::SERIES_URLS.iter().enumerate() {
                println!("{:>3}. {}", i + 1, url);
            }
            println!("\n{} series", series::SERIES_URLS.len());
            Ok(())
        }
        Commands::Extract { page, file } => {
            let report = extract_file(&page, &file)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Show { input, limit } => {
            let report = output::load_report(&input)?;
            if report.is_empty() {
                println!("No records in {}.", input.display());
                return Ok(());
            }
            print_records(&report.series, limit);
            println!("\n{} records | {}", report.len(), input.display());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Run the extractor over saved HTML. An empty file still yields the page's
/// fallback record.
fn extract_file(page: &str, file: &Path) -> anyhow::Result<SeriesReport> {
    let markup = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(SeriesReport {
        series: parser::process_page(&markup, page),
    })
}

fn print_records(records: &[LinkRecord], limit: usize) {
    for (i, r) in records.iter().take(limit).enumerate() {
        println!("{:>3}. Video: {}", i + 1, r.video_link);
        println!("     Thumb: {}", r.thumbnail_link);
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIMATE_TALES: &str = "https://plus.nasa.gov/series/climate-tales/";

    #[test]
    fn extract_empty_file_gives_page_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.html");
        std::fs::write(&file, "").unwrap();

        let report = extract_file(CLIMATE_TALES, &file).unwrap();
        assert_eq!(report.series, vec![parser::page_fallback(CLIMATE_TALES)]);
    }

    #[test]
    fn extract_saved_series_page() {
        let report = extract_file(
            "https://plus.nasa.gov/series/far-out/",
            Path::new("tests/fixtures/far_out.html"),
        )
        .unwrap();
        assert_eq!(report.len(), 3);
        assert_eq!(
            report.series[0].video_link,
            "https://plus.nasa.gov/video/far-out-the-moon/"
        );
    }

    #[test]
    fn extract_missing_file_is_an_error() {
        let err = extract_file(CLIMATE_TALES, Path::new("tests/fixtures/missing.html"))
            .unwrap_err();
        assert!(err.to_string().contains("missing.html"));
    }

    #[test]
    fn durations_are_human_readable() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1h 2m 5s");
    }
}
