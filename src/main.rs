//! # Political News Corpus
//!
//! Builds a labeled dataset of political-news items by crawling fact-check,
//! satire and mainstream news sites, normalizing every site's markup into one
//! record schema, and writing a deduplicated, size-bounded CSV.
//!
//! ## Sources
//!
//! - AfricaCheck, Snopes and PolitiFact (fact-checks, labeled from the verdict)
//! - The Onion (satire, always `Fake`)
//! - BBC Politics (reporting, always `Real`)
//!
//! ## Usage
//!
//! ```sh
//! political_news_corpus -o corpus.csv
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Crawling**: Walk each source's listing pages with a fixed pause between pages
//! 2. **Extraction**: Pull raw fields out of each item with source-specific selectors
//! 3. **Normalization**: Dates, country tags, keywords and the Real/Fake label
//! 4. **Aggregation**: Drop duplicate titles, downsample with a fixed seed
//! 5. **Output**: Write the final record set as CSV or JSON

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod config;
mod crawl;
mod fetch;
mod label;
mod models;
mod normalize;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use config::CrawlConfig;
use crawl::Crawler;
use fetch::HttpFetcher;
use scrapers::{SourceAdapter, adapter_for};
use utils::ensure_writable_parent;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("political_news_corpus starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Load config ----
    let mut config = match &args.config {
        Some(path) => CrawlConfig::load(path).await?,
        None => CrawlConfig::default(),
    };
    config.apply_cli(&args);
    debug!(?config, "Effective configuration");

    // Early check: a crawl takes minutes, so fail before it if the output is unwritable
    if let Err(e) = ensure_writable_parent(&args.output).await {
        error!(
            path = %args.output,
            error = %e,
            "Output location is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Crawl ----
    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout())?;
    let crawler = Crawler::new(
        fetcher,
        config.normalizer(),
        config.label_policy(),
        config.delay(),
    );
    let plan: Vec<(Box<dyn SourceAdapter>, usize)> = config
        .plan()
        .into_iter()
        .map(|(source, pages)| (adapter_for(source), pages))
        .collect();
    info!(
        sources = plan.len(),
        delay_ms = config.delay_ms,
        concurrency = config.concurrency,
        "Starting crawl"
    );

    let report = crawler.crawl_all(&plan, config.concurrency).await;
    report.log_summary();

    // ---- Aggregate ----
    let corpus = aggregate::aggregate(report.into_records(), config.max_records, config.seed);

    // ---- Output ----
    if let Err(e) = outputs::write_records(&corpus.records, &args.output, args.format).await {
        error!(path = %args.output, error = %e, "Failed to write corpus");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        path = %args.output,
        records = corpus.records.len(),
        duplicates_dropped = corpus.duplicates_dropped,
        sampled_out = corpus.sampled_out,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
