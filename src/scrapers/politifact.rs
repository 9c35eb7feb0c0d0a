//! PolitiFact statement scraper.
//!
//! Crawls `/factchecks/list/` filtered to the politics tag. Each statement is
//! an `li.o-listicle__item`; the first link carries the headline and a
//! site-relative href, and the `<footer>` holds a byline ending in the date.

use super::{RawItem, SourceAdapter, element_text, first_text};
use crate::models::{Label, Source};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.o-listicle__item").expect("valid selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid selector"));
static FOOTER: Lazy<Selector> = Lazy::new(|| Selector::parse("footer").expect("valid selector"));
static QUOTE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.m-statement__quote").expect("valid selector"));

#[derive(Debug, Clone, Copy, Default)]
pub struct PolitiFact;

impl SourceAdapter for PolitiFact {
    fn source(&self) -> Source {
        Source::PolitiFact
    }

    fn base_url(&self) -> &'static str {
        "https://www.politifact.com"
    }

    fn page_url(&self, page: usize) -> String {
        format!("https://www.politifact.com/factchecks/list/?page={page}&tag=politics")
    }

    fn fallback_verdict(&self) -> &'static str {
        "Fake"
    }

    fn forced_label(&self) -> Option<Label> {
        Some(Label::Fake)
    }

    fn extract(&self, document: &Html) -> Vec<RawItem> {
        document
            .select(&ITEM)
            .map(|item| {
                let link = item.select(&LINK).next();
                RawItem {
                    title: link.map(element_text),
                    href: link.and_then(|a| a.value().attr("href")).map(str::to_string),
                    date: first_text(item, &FOOTER),
                    verdict: first_text(item, &QUOTE),
                }
            })
            .collect()
    }
}
