//! Command-line interface definitions.
//!
//! Flags override values from the optional YAML config file, which in turn
//! override the built-in defaults (see [`crate::config`]).

use crate::models::Source;
use clap::{Parser, ValueEnum};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Build a labeled political-news corpus from fact-check, satire and news sites.
///
/// # Examples
///
/// ```sh
/// # Full crawl with defaults, writes mega_fake_real_political_news.csv
/// political_news_corpus
///
/// # Two sources only, no sampling, JSON output
/// political_news_corpus --source snopes --source bbc --no-sample -f json -o corpus.json
///
/// # Custom page budgets and country list
/// political_news_corpus -c crawl.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Destination file; overwritten if it exists
    #[arg(
        short,
        long,
        env = "CORPUS_OUTPUT",
        default_value = "mega_fake_real_political_news.csv"
    )]
    pub output: String,

    /// Optional path to a YAML crawl config
    #[arg(short, long, env = "CORPUS_CONFIG")]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Maximum number of records kept after deduplication
    #[arg(long)]
    pub max_records: Option<usize>,

    /// Keep every deduplicated record
    #[arg(long, conflicts_with = "max_records")]
    pub no_sample: bool,

    /// Seed for the downsampling RNG
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between page fetches of one source, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Number of sources crawled at the same time
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Crawl only this source (repeatable)
    #[arg(long, value_enum)]
    pub source: Vec<Source>,
}
