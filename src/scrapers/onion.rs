//! The Onion "News in Brief" scraper.
//!
//! Every `<h2>` on the listing is a headline. Listings carry no dates and all
//! content is satire, so the verdict is always `"Fake"`.

use super::{RawItem, SourceAdapter, element_text, first_attr};
use crate::models::Source;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static HEADLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").expect("valid selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

#[derive(Debug, Clone, Copy, Default)]
pub struct TheOnion;

impl SourceAdapter for TheOnion {
    fn source(&self) -> Source {
        Source::TheOnion
    }

    fn base_url(&self) -> &'static str {
        "https://www.theonion.com"
    }

    fn page_url(&self, page: usize) -> String {
        format!("https://www.theonion.com/c/news-in-brief?page={page}")
    }

    fn fallback_verdict(&self) -> &'static str {
        "Fake"
    }

    fn extract(&self, document: &Html) -> Vec<RawItem> {
        document
            .select(&HEADLINE)
            .map(|h2| RawItem {
                title: Some(element_text(h2)),
                href: first_attr(h2, &LINK, "href"),
                date: None,
                verdict: None,
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

    #[test]
    fn test_headlines_are_satire() {
        let html = r#"
            <html><body>
              <h2><a href="https://www.theonion.com/area-senator-filibusters-own-bill">Area Senator Filibusters Own Bill</a></h2>
              <h2>Nation Demands Answers</h2>
              <h2>Ads</h2>
            </body></html>
        "#;
        let doc = Html::parse_document(html);
        let records: Vec<_> = TheOnion
            .extract(&doc)
            .into_iter()
            .filter_map(|item| {
                build_record(&TheOnion, item, &Normalizer::default(), &LabelPolicy::default())
            })
            .collect();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.label == Label::Fake));
        assert!(records.iter().all(|r| r.medium == Medium::Satire));
        assert!(records.iter().all(|r| r.date.is_none()));
        assert_eq!(
            records[0].url.as_deref(),
            Some("https://www.theonion.com/area-senator-filibusters-own-bill")
        );
        assert_eq!(records[1].url, None);
        assert_eq!(records[1].verdict, "Fake");
    }

    #[test]
    fn test_page_url() {
        assert_eq!(
            TheOnion.page_url(1),
            "https://www.theonion.com/c/news-in-brief?page=1"
        );
    }
}
