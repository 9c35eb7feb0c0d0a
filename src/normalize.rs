//! Field normalizers shared by every source adapter.
//!
//! These are pure functions over raw extracted strings. None of them fail:
//! malformed input always maps to an absent or empty value.
//!
//! - [`normalize_date`]: free-form date text to a calendar date
//! - [`Normalizer::detect_country`]: first configured country named in a title
//! - [`extract_keywords`]: lowercase, comma-joined title tokens
//! - [`is_readable_title`]: the content-quality gate applied to every item

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Countries tagged when no list is configured, in priority order.
pub const DEFAULT_COUNTRIES: [&str; 11] = [
    "Kenya",
    "Nigeria",
    "South Africa",
    "Uganda",
    "Ghana",
    "USA",
    "UK",
    "Canada",
    "France",
    "Germany",
    "India",
];

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Oct|Nov|Dec";

/// Whole-string date layouts, tried in order after the RFC parsers.
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

static ISO_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").expect("valid ISO date regex"));

static MONTH_FIRST_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{months})\.?\s+\d{{1,2}},?\s+\d{{4}}\b", months = MONTHS))
        .expect("valid month-first date regex")
});

static DAY_FIRST_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b\d{{1,2}}\s+(?:{months})\.?,?\s+\d{{4}}\b", months = MONTHS))
        .expect("valid day-first date regex")
});

static MONTH_YEAR_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{months})\.?,?\s+\d{{4}}\b", months = MONTHS))
        .expect("valid month-year regex")
});

static ORDINAL_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("valid ordinal regex"));

/// Parse a free-form date string into a calendar date.
///
/// Ordinal suffixes are dropped first (`"March 5th"` reads as `"March 5"`).
/// The whole (trimmed) string is then tried against RFC 3339, a few naive
/// datetime layouts, RFC 2822 and the common human layouts in
/// [`DATE_FORMATS`]. If none match, the first date-shaped substring is
/// pulled out, which handles bylines like `"By Jane Doe • March 5, 2024"`.
/// Dates missing a day (`"March 2024"`) land on the first of the month, and
/// a bare year (`"2024"`) on January 1.
///
/// Returns `None` for missing or unparseable input.
pub fn normalize_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let raw = ORDINAL_SUFFIX.replace_all(raw, "$1");
    parse_whole(&raw)
        .or_else(|| parse_embedded(&raw))
        .or_else(|| parse_month_year(&raw))
        .or_else(|| parse_bare_year(&raw))
}

fn parse_whole(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_embedded(s: &str) -> Option<NaiveDate> {
    if let Some(m) = ISO_IN_TEXT.find(s) {
        if let Ok(date) = NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d") {
            return Some(date);
        }
    }

    let candidate = MONTH_FIRST_IN_TEXT
        .find(s)
        .or_else(|| DAY_FIRST_IN_TEXT.find(s))?;
    let cleaned = squash_punctuation(candidate.as_str());

    NaiveDate::parse_from_str(&cleaned, "%B %d %Y")
        .or_else(|_| NaiveDate::parse_from_str(&cleaned, "%d %B %Y"))
        .ok()
}

fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let candidate = MONTH_YEAR_IN_TEXT.find(s)?;
    let cleaned = squash_punctuation(candidate.as_str());
    NaiveDate::parse_from_str(&format!("1 {cleaned}"), "%d %B %Y").ok()
}

fn parse_bare_year(s: &str) -> Option<NaiveDate> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1)
}

fn squash_punctuation(s: &str) -> String {
    s.replace([',', '.'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase the title and join its whitespace-separated tokens with `", "`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_keywords("Hello WORLD"), "hello, world");
/// assert_eq!(extract_keywords(""), "");
/// ```
pub fn extract_keywords(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(", ")
}

/// True iff the title is present and longer than five characters once trimmed.
pub fn is_readable_title(title: Option<&str>) -> bool {
    title.is_some_and(|t| t.trim().chars().count() > 5)
}

/// Holds the configured country list for [`Normalizer::detect_country`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// `(display name, lowercased name)` in priority order.
    countries: Vec<(String, String)>,
}

impl Normalizer {
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let countries = countries
            .into_iter()
            .map(Into::into)
            .map(|c: String| {
                let lower = c.to_lowercase();
                (c, lower)
            })
            .collect();
        Self { countries }
    }

    /// Return the first configured country whose name appears in the title.
    ///
    /// Matching is a case-insensitive substring test. When several countries
    /// appear, list order decides, not position in the title.
    pub fn detect_country(&self, title: &str) -> Option<String> {
        let title = title.to_lowercase();
        self.countries
            .iter()
            .find(|(_, lower)| !lower.is_empty() && title.contains(lower.as_str()))
            .map(|(name, _)| name.clone())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRIES)
    }
}
