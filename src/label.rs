//! Label policy: maps a medium and a verdict to [`Label::Real`] or [`Label::Fake`].
//!
//! | medium | label |
//! |--------|-------|
//! | satire | always `Fake` |
//! | news | always `Real` |
//! | fact-check | `Fake` if the verdict contains a falsehood marker, else `Real` |
//!
//! Snopes and PolitiFact fall back to the verdict `"Fake"` when their verdict
//! element is missing, which makes those records `Fake` through this policy.

use crate::models::{Label, Medium};

/// Verdict substrings that mark a fact-checked claim as false.
pub const DEFAULT_FALSEHOOD_MARKERS: [&str; 3] = ["false", "fake", "misleading"];

#[derive(Debug, Clone)]
pub struct LabelPolicy {
    /// Lowercased markers, matched as substrings of the lowercased verdict.
    markers: Vec<String>,
}

impl LabelPolicy {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = markers
            .into_iter()
            .map(|m| m.as_ref().trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        Self { markers }
    }

    pub fn label(&self, medium: Medium, verdict: &str) -> Label {
        match medium {
            Medium::Satire => Label::Fake,
            Medium::News => Label::Real,
            Medium::FactCheck => {
                let verdict = verdict.to_lowercase();
                if self.markers.iter().any(|m| verdict.contains(m.as_str())) {
                    Label::Fake
                } else {
                    Label::Real
                }
            }
        }
    }
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FALSEHOOD_MARKERS)
    }
}
