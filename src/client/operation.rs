//! Request building and response decoding, shared by both client forms.
//!
//! An [`Operation`] knows its endpoint, how to build its JSON body and how to
//! turn a validated response into its output type. The async and blocking
//! clients only differ in how the bytes travel.

use super::validation::validate_batch_size;
use crate::config::Endpoint;
use crate::transport::{require_fields, validate_response, RawResponse};
use crate::types::{
    dedupe_aliases, ClassificationResult, ClassifyOptions, PlagiarismResult, WindowedResult,
};
use crate::{Error, ErrorContext, Result};
use serde_json::{json, Value};
use tracing::warn;

/// Date after which deprecated operations may be removed.
pub const DEPRECATION_REMOVAL_DATE: &str = "2027-06-30";

const PLAGIARISM_FIELDS: [&str; 5] = [
    "plagiarism_detected",
    "plagiarized_content",
    "total_sentences",
    "plagiarized_sentences",
    "percent_plagiarized",
];

pub(crate) trait Operation {
    type Output;

    fn name(&self) -> &'static str;
    fn endpoint(&self) -> Endpoint;
    fn body(&self, source: &str) -> Value;
    fn decode(&self, body: Value) -> Result<Self::Output>;
}

/// Validates a raw response and decodes it for `op`.
pub(crate) fn finish<O: Operation>(op: &O, raw: RawResponse) -> Result<O::Output> {
    validate_response(raw.status, &raw.body)
        .and_then(|mut body| {
            dedupe_aliases(&mut body);
            op.decode(body)
        })
        .map_err(|e| {
            warn!(
                operation = op.name(),
                status = raw.status,
                error = %e,
                "request failed"
            );
            e
        })
}

pub(crate) fn warn_deprecated(operation: &'static str, replacement: &'static str) {
    warn!(
        operation,
        replacement,
        removal_date = DEPRECATION_REMOVAL_DATE,
        "{} is deprecated and will be removed after {}; use {} instead",
        operation,
        DEPRECATION_REMOVAL_DATE,
        replacement
    );
}

/// Single-text classification against the unified or the short endpoint.
pub(crate) struct Classify<'a> {
    text: &'a str,
    options: &'a ClassifyOptions,
    endpoint: Endpoint,
}

impl<'a> Classify<'a> {
    pub(crate) fn new(text: &'a str, options: &'a ClassifyOptions) -> Self {
        Self {
            text,
            options,
            endpoint: Endpoint::Classify,
        }
    }

    pub(crate) fn short(text: &'a str, options: &'a ClassifyOptions) -> Self {
        Self {
            text,
            options,
            endpoint: Endpoint::Short,
        }
    }
}

impl Operation for Classify<'_> {
    type Output = ClassificationResult;

    fn name(&self) -> &'static str {
        match self.endpoint {
            Endpoint::Short => "classify_short",
            _ => "classify",
        }
    }

    fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    fn body(&self, source: &str) -> Value {
        let mut body = json!({
            "text": self.text,
            "source": source,
        });
        if let Some(flag) = self.options.public_dashboard_link {
            body["public_dashboard_link"] = json!(flag);
        }
        body
    }

    fn decode(&self, body: Value) -> Result<ClassificationResult> {
        require_fields(&body, &["text"], self.name())?;
        if self.options.wants_dashboard_link()
            && body.get("dashboard_link").map_or(true, Value::is_null)
            && body.get("dashboard_url").map_or(true, Value::is_null)
        {
            return Err(Error::missing_field("dashboard_link", self.name()));
        }
        Ok(serde_json::from_value(body)?)
    }
}

/// One request to the batch endpoint; at most `max_batch_size` texts.
pub(crate) struct ClassifyBatch<'a> {
    texts: Vec<&'a str>,
}

impl<'a> ClassifyBatch<'a> {
    pub(crate) fn new(texts: Vec<&'a str>, max_batch_size: usize) -> Result<Self> {
        validate_batch_size(texts.len(), max_batch_size)?;
        Ok(Self { texts })
    }
}

impl Operation for ClassifyBatch<'_> {
    type Output = Vec<ClassificationResult>;

    fn name(&self) -> &'static str {
        "classify_batch"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::Batch
    }

    fn body(&self, source: &str) -> Value {
        json!({
            "text": self.texts,
            "source": source,
        })
    }

    fn decode(&self, mut body: Value) -> Result<Vec<ClassificationResult>> {
        require_fields(&body, &["responses"], self.name())?;
        let responses = match body["responses"].take() {
            Value::Array(items) => items,
            other => {
                return Err(Error::api_with_context(
                    "responses is not an array",
                    ErrorContext::new()
                        .with_field_path("responses")
                        .with_details(format!("found {}", json_kind(&other)))
                        .with_source(self.name()),
                ))
            }
        };
        if responses.len() != self.texts.len() {
            return Err(Error::api_with_context(
                format!(
                    "batch returned {} responses for {} texts",
                    responses.len(),
                    self.texts.len()
                ),
                ErrorContext::new()
                    .with_field_path("responses")
                    .with_source(self.name()),
            ));
        }
        responses
            .into_iter()
            .enumerate()
            .map(|(i, item)| -> Result<ClassificationResult> {
                require_fields(&item, &["text"], self.name()).map_err(|_| {
                    Error::missing_field(format!("responses[{}].text", i), self.name())
                })?;
                Ok(serde_json::from_value(item)?)
            })
            .collect()
    }
}

/// Windowed classification against the sliding-window or extended endpoint.
pub(crate) struct ClassifyWindowed<'a> {
    text: &'a str,
    endpoint: Endpoint,
}

impl<'a> ClassifyWindowed<'a> {
    pub(crate) fn sliding_window(text: &'a str) -> Self {
        Self {
            text,
            endpoint: Endpoint::SlidingWindow,
        }
    }

    pub(crate) fn extended(text: &'a str) -> Self {
        Self {
            text,
            endpoint: Endpoint::Extended,
        }
    }
}

impl Operation for ClassifyWindowed<'_> {
    type Output = WindowedResult;

    fn name(&self) -> &'static str {
        match self.endpoint {
            Endpoint::Extended => "classify_extended",
            _ => "classify_windowed",
        }
    }

    fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    fn body(&self, source: &str) -> Value {
        json!({
            "text": self.text,
            "source": source,
        })
    }

    fn decode(&self, body: Value) -> Result<WindowedResult> {
        require_fields(&body, &["text", "windows"], self.name())?;
        Ok(serde_json::from_value(body)?)
    }
}

pub(crate) struct CheckPlagiarism<'a> {
    text: &'a str,
}

impl<'a> CheckPlagiarism<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Operation for CheckPlagiarism<'_> {
    type Output = PlagiarismResult;

    fn name(&self) -> &'static str {
        "check_plagiarism"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::Plagiarism
    }

    fn body(&self, source: &str) -> Value {
        json!({
            "text": self.text,
            "source": source,
        })
    }

    fn decode(&self, body: Value) -> Result<PlagiarismResult> {
        require_fields(&body, &PLAGIARISM_FIELDS, self.name())?;
        Ok(serde_json::from_value(body)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
