//! Data models for the canonical corpus record and its tags.
//!
//! Every source adapter produces [`Record`]s; the aggregator and the output
//! sinks only ever see this one shape.
//!
//! - [`Source`]: which site a record was crawled from
//! - [`Medium`]: coarse content category, fixed per source
//! - [`Label`]: binary ground-truth tag derived by the label policy
//! - [`Record`]: one row of the final dataset

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A crawled site.
///
/// The serialized form is the human-readable name written to the `source`
/// column; the CLI form is the short lowercase name accepted by `--source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Source {
    #[serde(rename = "AfricaCheck")]
    #[value(name = "africacheck")]
    AfricaCheck,
    #[serde(rename = "Snopes")]
    #[value(name = "snopes")]
    Snopes,
    #[serde(rename = "PolitiFact")]
    #[value(name = "politifact")]
    PolitiFact,
    #[serde(rename = "The Onion")]
    #[value(name = "onion")]
    TheOnion,
    #[serde(rename = "BBC Politics")]
    #[value(name = "bbc")]
    BbcPolitics,
}

impl Source {
    /// Every source, in the order the default crawl plan runs them.
    pub const ALL: [Source; 5] = [
        Source::AfricaCheck,
        Source::Snopes,
        Source::PolitiFact,
        Source::TheOnion,
        Source::BbcPolitics,
    ];

    /// The content category this source publishes.
    pub fn medium(self) -> Medium {
        match self {
            Source::AfricaCheck | Source::Snopes | Source::PolitiFact => Medium::FactCheck,
            Source::TheOnion => Medium::Satire,
            Source::BbcPolitics => Medium::News,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Source::AfricaCheck => "AfricaCheck",
            Source::Snopes => "Snopes",
            Source::PolitiFact => "PolitiFact",
            Source::TheOnion => "The Onion",
            Source::BbcPolitics => "BBC Politics",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse content category. Drives the label policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medium {
    #[serde(rename = "news")]
    News,
    #[serde(rename = "fact-check")]
    FactCheck,
    #[serde(rename = "satire")]
    Satire,
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Medium::News => "news",
            Medium::FactCheck => "fact-check",
            Medium::Satire => "satire",
        })
    }
}

/// Binary ground-truth tag. There is deliberately no "unknown" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Real,
    Fake,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Label::Real => "Real",
            Label::Fake => "Fake",
        })
    }
}

/// One row of the corpus.
///
/// Field order is the column order of the CSV output:
/// `source, medium, title, url, date, verdict, label, country, keywords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub source: Source,
    pub medium: Medium,
    /// Trimmed headline or claim text. Sole deduplication key.
    pub title: String,
    /// Absolute URL of the item, when the page linked one.
    pub url: Option<String>,
    /// Publication date, serialized as `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    /// Claim status as reported by the source, or the source's fallback.
    pub verdict: String,
    pub label: Label,
    pub country: Option<String>,
    /// Lowercased title tokens joined with `", "`.
    pub keywords: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            source: Source::TheOnion,
            medium: Medium::Satire,
            title: "Area Man Elected To Parliament".to_string(),
            url: Some("https://www.theonion.com/area-man".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
            verdict: "Fake".to_string(),
            label: Label::Fake,
            country: None,
            keywords: "area, man, elected, to, parliament".to_string(),
        }
    }

    #[test]
    fn test_every_source_has_a_medium() {
        assert_eq!(Source::AfricaCheck.medium(), Medium::FactCheck);
        assert_eq!(Source::Snopes.medium(), Medium::FactCheck);
        assert_eq!(Source::PolitiFact.medium(), Medium::FactCheck);
        assert_eq!(Source::TheOnion.medium(), Medium::Satire);
        assert_eq!(Source::BbcPolitics.medium(), Medium::News);
    }

    #[test]
    fn test_record_serialization_uses_display_names() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        assert!(json.contains(r#""source":"The Onion""#));
        assert!(json.contains(r#""medium":"satire""#));
        assert!(json.contains(r#""label":"Fake""#));
        assert!(json.contains(r#""date":"2024-03-05""#));
        assert!(json.contains(r#""country":null"#));
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "source": "BBC Politics",
            "medium": "news",
            "title": "Budget vote passes",
            "url": null,
            "date": null,
            "verdict": "Real",
            "label": "Real",
            "country": "UK",
            "keywords": "budget, vote, passes"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.source, Source::BbcPolitics);
        assert_eq!(record.medium, Medium::News);
        assert_eq!(record.label, Label::Real);
        assert_eq!(record.country.as_deref(), Some("UK"));
    }

    #[test]
    fn test_display_matches_serialized_names() {
        for source in Source::ALL {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source));
        }
        assert_eq!(Medium::FactCheck.to_string(), "fact-check");
        assert_eq!(Label::Real.to_string(), "Real");
    }
}
