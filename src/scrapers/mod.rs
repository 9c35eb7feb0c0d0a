//! Source adapters for the sites the corpus is built from.
//!
//! Each adapter knows one site's pagination scheme and one site's markup.
//! Shared per-item processing lives in [`build_record`], so the adapters
//! only extract raw strings.
//!
//! # Supported Sources
//!
//! | Source | Module | Medium | Pages |
//! |--------|--------|--------|-------|
//! | AfricaCheck | [`africacheck`] | fact-check | `0..n` |
//! | Snopes | [`snopes`] | fact-check | `1..=n` |
//! | PolitiFact | [`politifact`] | fact-check | `1..=n` |
//! | The Onion | [`onion`] | satire | `1..=n` |
//! | BBC Politics | [`bbc`] | news | `1..=n` |
//!
//! # Markup Contract
//!
//! Selectors are a snapshot of each site's markup. When a site changes, the
//! selectors stop matching and the adapter yields nothing for that page; it
//! never errors.

use crate::label::LabelPolicy;
use crate::models::{Label, Record, Source};
use crate::normalize::{Normalizer, extract_keywords, is_readable_title, normalize_date};
use scraper::{ElementRef, Html, Selector};
use std::ops::Range;
use url::Url;

pub mod africacheck;
pub mod bbc;
pub mod onion;
pub mod politifact;
pub mod snopes;

/// Raw strings pulled out of one item container, before normalization.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawItem {
    pub title: Option<String>,
    pub href: Option<String>,
    pub date: Option<String>,
    pub verdict: Option<String>,
}

/// One site's pagination scheme and element layout.
pub trait SourceAdapter: Send + Sync {
    fn source(&self) -> Source;

    /// Base URL that relative links are resolved against.
    fn base_url(&self) -> &'static str;

    /// Listing page URL for page index `page`.
    fn page_url(&self, page: usize) -> String;

    /// Page indices covered by a budget of `max_pages` pages.
    ///
    /// Most listings are 1-based.
    fn pages(&self, max_pages: usize) -> Range<usize> {
        1..max_pages + 1
    }

    /// Verdict used when the item carries none.
    fn fallback_verdict(&self) -> &'static str;

    /// Label stamped on every record of this source, bypassing the label policy.
    ///
    /// The verdict column still carries whatever the page reported.
    fn forced_label(&self) -> Option<Label> {
        None
    }

    /// Pull the raw fields of every item container on the page.
    fn extract(&self, document: &Html) -> Vec<RawItem>;
}

/// Look up the adapter for a source.
pub fn adapter_for(source: Source) -> Box<dyn SourceAdapter> {
    match source {
        Source::AfricaCheck => Box::new(africacheck::AfricaCheck),
        Source::Snopes => Box::new(snopes::Snopes),
        Source::PolitiFact => Box::new(politifact::PolitiFact),
        Source::TheOnion => Box::new(onion::TheOnion),
        Source::BbcPolitics => Box::new(bbc::BbcPolitics),
    }
}

/// Turn a raw item into a canonical record, or `None` if its title is unreadable.
pub fn build_record(
    adapter: &dyn SourceAdapter,
    item: RawItem,
    normalizer: &Normalizer,
    policy: &LabelPolicy,
) -> Option<Record> {
    if !is_readable_title(item.title.as_deref()) {
        return None;
    }
    let title = item.title?.trim().to_string();

    let source = adapter.source();
    let medium = source.medium();
    let url = item
        .href
        .as_deref()
        .and_then(|href| resolve_url(adapter.base_url(), href));
    let date = normalize_date(item.date.as_deref());
    let verdict = item
        .verdict
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| adapter.fallback_verdict().to_string());
    let label = adapter
        .forced_label()
        .unwrap_or_else(|| policy.label(medium, &verdict));

    Some(Record {
        source,
        medium,
        url,
        date,
        label,
        country: normalizer.detect_country(&title),
        keywords: extract_keywords(&title),
        verdict,
        title,
    })
}

/// Resolve `href` against `base`; absolute hrefs pass through unchanged.
pub fn resolve_url(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let base = Url::parse(base).ok()?;
    base.join(href).ok().map(|u| u.to_string())
}

/// All descendant text of an element, concatenated and trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant matching `selector`.
pub fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(element_text)
}

/// Attribute value of the first descendant matching `selector`.
pub fn first_attr(element: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Medium;

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("https://www.politifact.com", "/factchecks/2024/mar/05/x/"),
            Some("https://www.politifact.com/factchecks/2024/mar/05/x/".to_string())
        );
        assert_eq!(
            resolve_url("https://www.snopes.com", "https://www.snopes.com/fact-check/y/"),
            Some("https://www.snopes.com/fact-check/y/".to_string())
        );
        assert_eq!(resolve_url("https://www.bbc.com", "  "), None);
    }

    #[test]
    fn test_build_record_rejects_short_titles() {
        let item = RawItem {
            title: Some("  Hi  ".to_string()),
            ..Default::default()
        };
        let record = build_record(
            &snopes::Snopes,
            item,
            &Normalizer::default(),
            &LabelPolicy::default(),
        );
        assert!(record.is_none());

        let record = build_record(
            &snopes::Snopes,
            RawItem::default(),
            &Normalizer::default(),
            &LabelPolicy::default(),
        );
        assert!(record.is_none());
    }

    #[test]
    fn test_build_record_normalizes_fields() {
        let item = RawItem {
            title: Some("\n  Did Kenya ban plastic bags?  ".to_string()),
            href: Some("/fact-check/kenya-bags/".to_string()),
            date: Some("2024-03-05T10:00:00+00:00".to_string()),
            verdict: Some("  Mostly True ".to_string()),
        };
        let record = build_record(
            &snopes::Snopes,
            item,
            &Normalizer::default(),
            &LabelPolicy::default(),
        )
        .unwrap();

        assert_eq!(record.source, Source::Snopes);
        assert_eq!(record.medium, Medium::FactCheck);
        assert_eq!(record.title, "Did Kenya ban plastic bags?");
        assert_eq!(
            record.url.as_deref(),
            Some("https://www.snopes.com/fact-check/kenya-bags/")
        );
        assert_eq!(record.date.unwrap().to_string(), "2024-03-05");
        assert_eq!(record.verdict, "Mostly True");
        assert_eq!(record.label, Label::Fake);
        assert_eq!(record.country.as_deref(), Some("Kenya"));
        assert_eq!(record.keywords, "did, kenya, ban, plastic, bags?");
    }

    #[test]
    fn test_build_record_uses_fallback_verdict() {
        let item = RawItem {
            title: Some("Politician said something odd".to_string()),
            verdict: Some("   ".to_string()),
            ..Default::default()
        };
        let record = build_record(
            &politifact::PolitiFact,
            item,
            &Normalizer::default(),
            &LabelPolicy::default(),
        )
        .unwrap();
        assert_eq!(record.verdict, "Fake");
        assert_eq!(record.label, Label::Fake);
        assert_eq!(record.url, None);
        assert_eq!(record.date, None);
    }

    #[test]
    fn test_forced_label_ignores_verdict_text() {
        let normalizer = Normalizer::default();
        let policy = LabelPolicy::default();
        for adapter in [adapter_for(Source::Snopes), adapter_for(Source::PolitiFact)] {
            let item = RawItem {
                title: Some("Says taxes doubled last year".to_string()),
                verdict: Some("Says taxes doubled last year".to_string()),
                ..Default::default()
            };
            let record = build_record(adapter.as_ref(), item, &normalizer, &policy).unwrap();
            assert_eq!(record.verdict, "Says taxes doubled last year");
            assert_eq!(record.label, Label::Fake, "{}", adapter.source());
        }

        // Sources without a forced label still go through the policy.
        let item = RawItem {
            title: Some("Minister claims record growth".to_string()),
            verdict: Some("Correct".to_string()),
            ..Default::default()
        };
        let record = build_record(&africacheck::AfricaCheck, item, &normalizer, &policy).unwrap();
        assert_eq!(record.label, Label::Real);
    }

    #[test]
    fn test_adapter_lookup() {
        for source in Source::ALL {
            let adapter = adapter_for(source);
            assert_eq!(adapter.source(), source);
            assert!(adapter.page_url(1).starts_with(adapter.base_url()));
        }
    }
}
