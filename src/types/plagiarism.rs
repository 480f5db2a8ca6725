//! Plagiarism check result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub plagiarism_detected: bool,
    /// Matched passages grouped by the source they were found in.
    pub plagiarized_content: Vec<PlagiarizedSource>,
    pub total_sentences: u64,
    pub plagiarized_sentences: Vec<String>,
    /// Share of sentences flagged, in percent (0 to 100).
    pub percent_plagiarized: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A source document that matched part of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarizedSource {
    #[serde(alias = "url", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub matched_sentences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlagiarismResult {
    pub fn percent_in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.percent_plagiarized)
    }

    pub fn flagged_count(&self) -> usize {
        self.plagiarized_sentences.len()
    }
}
