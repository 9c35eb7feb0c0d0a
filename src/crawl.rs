//! Crawl orchestration.
//!
//! A [`Crawler`] walks each adapter's page range strictly in order, pausing
//! between pages. Several sources can be crawled at once, but their outcomes
//! are always merged in plan order, so deduplication downstream sees the same
//! record sequence no matter how the fetches interleave.
//!
//! Failures never abort a crawl. A page that cannot be fetched is logged,
//! counted in [`SourceCrawl::pages_failed`] and skipped.

use crate::fetch::PageFetcher;
use crate::label::LabelPolicy;
use crate::models::{Record, Source};
use crate::normalize::Normalizer;
use crate::scrapers::{SourceAdapter, build_record};
use futures::stream::{self, StreamExt};
use scraper::Html;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// What one source contributed, plus how the crawl went.
#[derive(Debug, Clone)]
pub struct SourceCrawl {
    pub source: Source,
    /// Records in page order, then item order within a page.
    pub records: Vec<Record>,
    pub pages_attempted: usize,
    pub pages_failed: usize,
    pub items_seen: usize,
    /// Items dropped for an unreadable title.
    pub items_rejected: usize,
}

impl SourceCrawl {
    fn new(source: Source) -> Self {
        Self {
            source,
            records: Vec::new(),
            pages_attempted: 0,
            pages_failed: 0,
            items_seen: 0,
            items_rejected: 0,
        }
    }
}

/// Outcomes of every source, in plan order.
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    pub sources: Vec<SourceCrawl>,
}

impl CrawlReport {
    pub fn total_records(&self) -> usize {
        self.sources.iter().map(|s| s.records.len()).sum()
    }

    pub fn total_pages_failed(&self) -> usize {
        self.sources.iter().map(|s| s.pages_failed).sum()
    }

    /// Sources that produced no records at all.
    pub fn empty_sources(&self) -> Vec<Source> {
        self.sources
            .iter()
            .filter(|s| s.records.is_empty())
            .map(|s| s.source)
            .collect()
    }

    pub fn log_summary(&self) {
        for s in &self.sources {
            info!(
                source = %s.source,
                records = s.records.len(),
                pages_attempted = s.pages_attempted,
                pages_failed = s.pages_failed,
                items_seen = s.items_seen,
                items_rejected = s.items_rejected,
                "Source crawl summary"
            );
        }
        for source in self.empty_sources() {
            warn!(%source, "Source contributed no records");
        }
    }

    /// Concatenate every source's records in plan order.
    pub fn into_records(self) -> Vec<Record> {
        self.sources.into_iter().flat_map(|s| s.records).collect()
    }
}

pub struct Crawler<F> {
    fetcher: F,
    normalizer: Normalizer,
    policy: LabelPolicy,
    delay: Duration,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(fetcher: F, normalizer: Normalizer, policy: LabelPolicy, delay: Duration) -> Self {
        Self {
            fetcher,
            normalizer,
            policy,
            delay,
        }
    }

    /// Crawl one source across its page budget.
    #[instrument(level = "info", skip_all, fields(source = %adapter.source(), max_pages = max_pages))]
    pub async fn crawl_source(&self, adapter: &dyn SourceAdapter, max_pages: usize) -> SourceCrawl {
        let t0 = Instant::now();
        let mut outcome = SourceCrawl::new(adapter.source());

        for page in adapter.pages(max_pages) {
            let url = adapter.page_url(page);
            outcome.pages_attempted += 1;

            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(%url, page, error = %e, "Page fetch failed; skipping");
                    outcome.pages_failed += 1;
                    continue;
                }
            };

            let (kept, rejected) = {
                let document = Html::parse_document(&body);
                let items = adapter.extract(&document);
                let seen = items.len();
                let before = outcome.records.len();
                outcome.records.extend(items.into_iter().filter_map(|item| {
                    build_record(adapter, item, &self.normalizer, &self.policy)
                }));
                outcome.items_seen += seen;
                let kept = outcome.records.len() - before;
                (kept, seen - kept)
            };
            outcome.items_rejected += rejected;
            debug!(%url, page, kept, rejected, "Processed page");

            if !self.delay.is_zero() {
                sleep(self.delay).await;
            }
        }

        info!(
            records = outcome.records.len(),
            pages_failed = outcome.pages_failed,
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Finished source"
        );
        outcome
    }

    /// Crawl every `(adapter, page budget)` in `plan`.
    ///
    /// Up to `concurrency` sources run at once. The report lists outcomes in
    /// plan order regardless of which source finished first.
    #[instrument(level = "info", skip_all, fields(sources = plan.len(), concurrency = concurrency))]
    pub async fn crawl_all(
        &self,
        plan: &[(Box<dyn SourceAdapter>, usize)],
        concurrency: usize,
    ) -> CrawlReport {
        let sources = stream::iter(plan.iter())
            .map(|(adapter, max_pages)| self.crawl_source(adapter.as_ref(), *max_pages))
            .buffered(concurrency.max(1))
            .collect::<Vec<_>>()
            .await;

        let report = CrawlReport { sources };
        info!(
            records = report.total_records(),
            pages_failed = report.total_pages_failed(),
            "Crawl complete"
        );
        report
    }
}
