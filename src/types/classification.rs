//! Single-text classification result.

use super::windowed::Window;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of classifying one text.
///
/// Older API revisions report `likelihood`/`ai_likelihood`; the v3 revision
/// reports `fraction_ai` and may attach `windows` for long inputs. Both are
/// accepted; use [`ClassificationResult::score`] to read whichever is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Echo of the submitted text.
    pub text: String,
    #[serde(alias = "likelihood", skip_serializing_if = "Option::is_none")]
    pub ai_likelihood: Option<f64>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<Vec<Window>>,
    #[serde(alias = "dashboard_url", skip_serializing_if = "Option::is_none")]
    pub dashboard_link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassificationResult {
    /// AI likelihood, falling back to the v3 `fraction_ai` aggregate.
    pub fn score(&self) -> Option<f64> {
        self.ai_likelihood.or(self.fraction_ai)
    }

    /// True when the response echoed `input` unchanged.
    pub fn echoes(&self, input: &str) -> bool {
        self.text == input
    }

    pub fn scores_in_range(&self) -> bool {
        [
            self.ai_likelihood,
            self.fraction_ai,
            self.fraction_ai_assisted,
            self.fraction_human,
        ]
        .into_iter()
        .all(super::in_unit_range)
            && self
                .windows
                .as_ref()
                .map_or(true, |ws| ws.iter().all(Window::scores_in_range))
    }
}

/// Optional flags for `classify_with_options`.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    /// Ask the service for a public dashboard URL in the response.
    pub public_dashboard_link: Option<bool>,
}

impl ClassifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboard_link(mut self, enabled: bool) -> Self {
        self.public_dashboard_link = Some(enabled);
        self
    }

    pub(crate) fn wants_dashboard_link(&self) -> bool {
        self.public_dashboard_link.unwrap_or(false)
    }
}
