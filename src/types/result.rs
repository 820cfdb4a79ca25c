//! Normalized result shapes returned by the engine façade.
//!
//! Every field carries a serde default so that a sparse remote response
//! (`{"seo_score": 77}`) still deserializes into a fully-populated
//! structure. Callers never branch on which provider produced a result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Content analysis: scores, metrics and actionable recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Heuristic SEO score, 0–100.
    #[serde(default)]
    pub seo_score: u8,
    /// Readability score, 0–100 (higher is easier).
    #[serde(default)]
    pub readability_score: u8,
    /// Whitespace-token count of the markup-stripped content.
    #[serde(default)]
    pub word_count: usize,
    /// Per-keyword density, formatted as a percentage string ("1.25%").
    #[serde(default)]
    pub keyword_density: BTreeMap<String, String>,
    /// At most five improvement suggestions, most pressing first.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// One section of a generated outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub subheadings: Vec<String>,
}

/// Generated content outline with title and meta-description suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentOutline {
    #[serde(default)]
    pub title_suggestions: Vec<String>,
    #[serde(default)]
    pub outline: Vec<OutlineSection>,
    #[serde(default)]
    pub meta_description: String,
}

/// Semantic keyword expansion around a primary keyword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    #[serde(default)]
    pub primary_keyword: String,
    #[serde(default)]
    pub semantic_keywords: Vec<String>,
    #[serde(default)]
    pub long_tail_variations: Vec<String>,
    #[serde(default)]
    pub lsi_keywords: Vec<String>,
}

/// One meta-description candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaVariation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub character_count: usize,
}

/// A set of meta-description candidates, each at most 160 characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaDescriptionSet {
    #[serde(default)]
    pub variations: Vec<MetaVariation>,
}
