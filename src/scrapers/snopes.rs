//! Snopes fact-check scraper.
//!
//! Crawls the politics search results under `/fact-check/page/{n}/`. Each
//! result is an `<article>` with the headline in an `<h2>` and the publish
//! time in the `datetime` attribute of a `<time>` element.
//!
//! Snopes listings rarely expose a verdict element, so most records fall
//! back to the verdict `"Fake"`. Every record is labeled `Fake` regardless.

use super::{RawItem, SourceAdapter, element_text, first_attr, first_text};
use crate::models::{Label, Source};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").expect("valid selector"));
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").expect("valid selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));
static TIME: Lazy<Selector> = Lazy::new(|| Selector::parse("time").expect("valid selector"));
static CLAIM: Lazy<Selector> = Lazy::new(|| Selector::parse("span.claim").expect("valid selector"));

#[derive(Debug, Clone, Copy, Default)]
pub struct Snopes;

impl SourceAdapter for Snopes {
    fn source(&self) -> Source {
        Source::Snopes
    }

    fn base_url(&self) -> &'static str {
        "https://www.snopes.com"
    }

    fn page_url(&self, page: usize) -> String {
        format!("https://www.snopes.com/fact-check/page/{page}/?s=politics")
    }

    fn fallback_verdict(&self) -> &'static str {
        "Fake"
    }

    fn forced_label(&self) -> Option<Label> {
        Some(Label::Fake)
    }

    fn extract(&self, document: &Html) -> Vec<RawItem> {
        document
            .select(&ARTICLE)
            .map(|article| {
                let heading = article.select(&HEADING).next();
                RawItem {
                    title: heading.map(element_text),
                    href: heading.and_then(|h| first_attr(h, &LINK, "href")),
                    date: first_attr(article, &TIME, "datetime"),
                    verdict: first_text(article, &CLAIM),
                }
            })
            .collect()
    }
}
