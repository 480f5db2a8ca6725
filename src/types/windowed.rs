//! Long-document (windowed) results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Range;

/// One contiguous slice of the input, classified on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    #[serde(default)]
    pub text: String,
    /// Character offset of the first character of the window in the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,
    /// Character offset one past the last character of the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,
    #[serde(alias = "likelihood", skip_serializing_if = "Option::is_none")]
    pub ai_likelihood: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_assistance_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_length: Option<usize>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Window {
    pub fn span(&self) -> Option<Range<usize>> {
        match (self.start_index, self.end_index) {
            (Some(start), Some(end)) if start <= end => Some(start..end),
            _ => None,
        }
    }

    /// Likelihood, or the assistance score when the window only carries that.
    pub fn score(&self) -> Option<f64> {
        self.ai_likelihood.or(self.ai_assistance_score)
    }

    /// Cuts this window out of `source` using its character offsets.
    pub fn slice_of<'a>(&self, source: &'a str) -> Option<&'a str> {
        let span = self.span()?;
        let byte_at = |chars: usize| {
            source
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(source.len()))
                .nth(chars)
        };
        let start = byte_at(span.start)?;
        let end = byte_at(span.end)?;
        source.get(start..end)
    }

    pub fn scores_in_range(&self) -> bool {
        super::in_unit_range(self.ai_likelihood) && super::in_unit_range(self.ai_assistance_score)
    }
}

/// Aggregate result of a windowed (sliding-window or extended) classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedResult {
    pub text: String,
    #[serde(alias = "likelihood", skip_serializing_if = "Option::is_none")]
    pub ai_likelihood: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ai_likelihood: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ai_likelihood: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraction_ai: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraction_ai_assisted: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraction_human: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    pub windows: Vec<Window>,
    #[serde(alias = "dashboard_url", skip_serializing_if = "Option::is_none")]
    pub dashboard_link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WindowedResult {
    pub fn echoes(&self, input: &str) -> bool {
        self.text == input
    }

    /// Highest window score, preferring the aggregate the service reported.
    pub fn max_score(&self) -> Option<f64> {
        self.max_ai_likelihood.or_else(|| {
            self.windows
                .iter()
                .filter_map(Window::score)
                .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))))
        })
    }

    /// Windows whose label matches `label`, case-insensitively.
    pub fn windows_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Window> + 'a {
        self.windows.iter().filter(move |w| {
            w.label
                .as_deref()
                .map_or(false, |l| l.eq_ignore_ascii_case(label))
        })
    }

    pub fn scores_in_range(&self) -> bool {
        [
            self.ai_likelihood,
            self.max_ai_likelihood,
            self.avg_ai_likelihood,
            self.fraction_ai,
            self.fraction_ai_assisted,
            self.fraction_human,
        ]
        .into_iter()
        .all(super::in_unit_range)
            && self.windows.iter().all(Window::scores_in_range)
    }
}
