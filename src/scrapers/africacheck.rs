//! AfricaCheck fact-check scraper.
//!
//! Crawls the politics topic listing of [AfricaCheck](https://africacheck.org).
//! The listing is paginated from `page=0`.
//!
//! Each result is a `div.search-result__content` whose first link carries the
//! headline and a site-relative href. Verdicts, when present, sit in
//! `span.fact-check__verdict-text`.

use super::{RawItem, SourceAdapter, element_text, first_text};
use crate::models::Source;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::ops::Range;

static RESULT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.search-result__content").expect("valid selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid selector"));
static TIME: Lazy<Selector> = Lazy::new(|| Selector::parse("time").expect("valid selector"));
static VERDICT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.fact-check__verdict-text").expect("valid selector"));

#[derive(Debug, Clone, Copy, Default)]
pub struct AfricaCheck;

impl SourceAdapter for AfricaCheck {
    fn source(&self) -> Source {
        Source::AfricaCheck
    }

    fn base_url(&self) -> &'static str {
        "https://africacheck.org"
    }

    fn page_url(&self, page: usize) -> String {
        format!("https://africacheck.org/fact-checks?f%5B0%5D=topics%3A152&page={page}")
    }

    fn pages(&self, max_pages: usize) -> Range<usize> {
        0..max_pages
    }

    fn fallback_verdict(&self) -> &'static str {
        "Unknown"
    }

    fn extract(&self, document: &Html) -> Vec<RawItem> {
        document
            .select(&RESULT)
            .map(|result| {
                let link = result.select(&LINK).next();
                RawItem {
                    title: link.map(element_text),
                    href: link.and_then(|a| a.value().attr("href")).map(str::to_string),
                    date: first_text(result, &TIME),
                    verdict: first_text(result, &VERDICT),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelPolicy;
    use crate::models::{Label, Medium};
    use crate::normalize::Normalizer;
    use crate::scrapers::build_record;

    const LISTING: &str = r#"
        <html><body>
          <div class="search-result__content">
            <a href="/fact-checks/reports/nigeria-budget-claim">Nigeria doubled its education budget?</a>
            <time>12 February 2024</time>
            <span class="fact-check__verdict-text">Incorrect, misleading</span>
          </div>
          <div class="search-result__content">
            <a href="/fact-checks/reports/ghana-roads">Ghana built 10,000 km of roads</a>
            <time>not a date</time>
          </div>
          <div class="search-result__content">
            <p>No link in this one</p>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_page_urls_are_zero_based() {
        let pages: Vec<usize> = AfricaCheck.pages(3).collect();
        assert_eq!(pages, vec![0, 1, 2]);
        assert!(AfricaCheck.page_url(0).ends_with("&page=0"));
        assert_eq!(AfricaCheck.pages(0).count(), 0);
    }

    #[test]
    fn test_extract_listing() {
        let doc = Html::parse_document(LISTING);
        let items = AfricaCheck.extract(&doc);
        assert_eq!(items.len(), 3);

        assert_eq!(
            items[0].title.as_deref(),
            Some("Nigeria doubled its education budget?")
        );
        assert_eq!(
            items[0].href.as_deref(),
            Some("/fact-checks/reports/nigeria-budget-claim")
        );
        assert_eq!(items[0].date.as_deref(), Some("12 February 2024"));
        assert_eq!(items[0].verdict.as_deref(), Some("Incorrect, misleading"));

        assert_eq!(items[1].verdict, None);
        assert_eq!(items[2], RawItem::default());
    }

    #[test]
    fn test_records_from_listing() {
        let doc = Html::parse_document(LISTING);
        let records: Vec<_> = AfricaCheck
            .extract(&doc)
            .into_iter()
            .filter_map(|item| {
                build_record(
                    &AfricaCheck,
                    item,
                    &Normalizer::default(),
                    &LabelPolicy::default(),
                )
            })
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].medium, Medium::FactCheck);
        assert_eq!(records[0].label, Label::Fake);
        assert_eq!(
            records[0].url.as_deref(),
            Some("https://africacheck.org/fact-checks/reports/nigeria-budget-claim")
        );
        assert_eq!(records[0].date.unwrap().to_string(), "2024-02-12");
        assert_eq!(records[0].country.as_deref(), Some("Nigeria"));

        assert_eq!(records[1].verdict, "Unknown");
        assert_eq!(records[1].label, Label::Real);
        assert_eq!(records[1].date, None);
    }

    #[test]
    fn test_redesigned_page_yields_nothing() {
        let doc = Html::parse_document("<html><body><ul><li>new layout</li></ul></body></html>");
        assert!(AfricaCheck.extract(&doc).is_empty());
    }
}
