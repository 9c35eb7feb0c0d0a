//! BBC Politics scraper.
//!
//! Headlines on the politics index are `a.gs-c-promo-heading` anchors with
//! site-relative hrefs. BBC is mainstream reporting, so every record is
//! labeled `Real` with the verdict `"Real"`.

use super::{RawItem, SourceAdapter, element_text};
use crate::models::Source;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static PROMO: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.gs-c-promo-heading").expect("valid selector"));

#[derive(Debug, Clone, Copy, Default)]
pub struct BbcPolitics;

impl SourceAdapter for BbcPolitics {
    fn source(&self) -> Source {
        Source::BbcPolitics
    }

    fn base_url(&self) -> &'static str {
        "https://www.bbc.com"
    }

    fn page_url(&self, page: usize) -> String {
        format!("https://www.bbc.com/news/politics?page={page}")
    }

    fn fallback_verdict(&self) -> &'static str {
        "Real"
    }

    fn extract(&self, document: &Html) -> Vec<RawItem> {
        document
            .select(&PROMO)
            .map(|a| RawItem {
                title: Some(element_text(a)),
                href: a.value().attr("href").map(str::to_string),
                date: None,
                verdict: None,
            })
            .collect()
    }
}
