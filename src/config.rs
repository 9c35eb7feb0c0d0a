//! Crawl configuration.
//!
//! Values come from three layers, last one wins:
//! 1. compiled-in defaults ([`CrawlConfig::default`])
//! 2. an optional YAML file passed with `--config`
//! 3. command-line flags ([`CrawlConfig::apply_cli`])
//!
//! # Example
//!
//! ```yaml
//! delay_ms: 500
//! max_records: 2000
//! seed: 7
//! countries: [Kenya, Nigeria, Brazil]
//! pages:
//!   snopes: 10
//!   bbc: 5
//! ```

use crate::cli::Cli;
use crate::fetch::DEFAULT_USER_AGENT;
use crate::label::{DEFAULT_FALSEHOOD_MARKERS, LabelPolicy};
use crate::models::Source;
use crate::normalize::{DEFAULT_COUNTRIES, Normalizer};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Page budget per source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageBudgets {
    pub africacheck: usize,
    pub snopes: usize,
    pub politifact: usize,
    pub onion: usize,
    pub bbc: usize,
}

impl PageBudgets {
    pub fn for_source(&self, source: Source) -> usize {
        match source {
            Source::AfricaCheck => self.africacheck,
            Source::Snopes => self.snopes,
            Source::PolitiFact => self.politifact,
            Source::TheOnion => self.onion,
            Source::BbcPolitics => self.bbc,
        }
    }
}

impl Default for PageBudgets {
    fn default() -> Self {
        Self {
            africacheck: 50,
            snopes: 50,
            politifact: 50,
            onion: 20,
            bbc: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Pause after each processed page, per source.
    pub delay_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Cap on the final record count; `None` keeps everything.
    pub max_records: Option<usize>,
    pub seed: u64,
    /// Number of sources crawled at once. Pages of one source are always sequential.
    pub concurrency: usize,
    pub countries: Vec<String>,
    pub falsehood_markers: Vec<String>,
    pub pages: PageBudgets,
    /// Restrict the crawl to these sources. Empty means all of them.
    #[serde(skip)]
    pub only: Vec<Source>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            delay_ms: 300,
            timeout_secs: 20,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_records: Some(1500),
            seed: 42,
            concurrency: 1,
            countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            falsehood_markers: DEFAULT_FALSEHOOD_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            pages: PageBudgets::default(),
            only: Vec::new(),
        }
    }
}

impl CrawlConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: display.clone(),
                source,
            })?;
        let config = Self::from_yaml(&yaml).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;
        info!("Loaded crawl configuration");
        Ok(config)
    }

    /// Overlay command-line flags on top of this configuration.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(delay_ms) = cli.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(max_records) = cli.max_records {
            self.max_records = Some(max_records);
        }
        if cli.no_sample {
            self.max_records = None;
        }
        if let Some(concurrency) = cli.concurrency {
            self.concurrency = concurrency;
        }
        if !cli.source.is_empty() {
            self.only = cli.source.clone();
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.countries.iter().cloned())
    }

    pub fn label_policy(&self) -> LabelPolicy {
        LabelPolicy::new(&self.falsehood_markers)
    }

    /// Sources to crawl, in plan order, with their page budgets.
    pub fn plan(&self) -> Vec<(Source, usize)> {
        Source::ALL
            .into_iter()
            .filter(|s| self.only.is_empty() || self.only.contains(s))
            .map(|s| (s, self.pages.for_source(s)))
            .collect()
    }
}
