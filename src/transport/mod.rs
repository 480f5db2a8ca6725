//! HTTP plumbing shared by the async and blocking clients.
//!
//! Sending differs per form (`http` vs `blocking`); everything after the bytes
//! arrive goes through [`validate_response`], so both forms agree on what
//! counts as a failure.

mod http;

#[cfg(feature = "blocking")]
mod blocking;

#[cfg(feature = "blocking")]
pub(crate) use blocking::BlockingTransport;
pub(crate) use http::HttpTransport;

use crate::{Error, ErrorContext, Result};
use serde_json::Value;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout(),
        }
    }
}

/// Status code and body text of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Checks a raw response and returns the decoded JSON body.
///
/// Any status other than 200 is an `Api` error carrying the raw body. A 200
/// body that is not JSON, or that carries a non-null `error` field, is an
/// `Api` error without a status.
pub fn validate_response(status: u16, body: &str) -> Result<Value> {
    if status != 200 {
        return Err(Error::api_status(status, body));
    }
    let value: Value = serde_json::from_str(body).map_err(|e| {
        Error::api_with_context(
            format!("response body is not valid JSON: {}", e),
            ErrorContext::new().with_details(preview(body)),
        )
    })?;
    if let Some(err) = value.get("error").filter(|v| !v.is_null()) {
        return Err(Error::api_with_context(
            in_band_message(err),
            ErrorContext::new().with_source("in_band_error"),
        ));
    }
    Ok(value)
}

/// Fails with a missing-field `Api` error unless every field is present and non-null.
pub fn require_fields(value: &Value, fields: &[&str], source: &str) -> Result<()> {
    for field in fields {
        if value.get(*field).map_or(true, Value::is_null) {
            return Err(Error::missing_field(*field, source));
        }
    }
    Ok(())
}

fn in_band_message(err: &Value) -> String {
    match err {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| err.to_string()),
        other => other.to_string(),
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() <= BODY_PREVIEW_CHARS {
        body.to_string()
    } else {
        let head: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
