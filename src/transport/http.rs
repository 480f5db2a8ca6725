use super::{RawResponse, TransportError, API_KEY_HEADER, REQUEST_ID_HEADER};
use crate::{Error, Result};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// Async HTTP transport. Holds the credential and a `reqwest::Client`
/// configured with the per-call timeout.
#[derive(Clone)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
    api_key: String,
}

impl HttpTransport {
    pub(crate) fn new(api_key: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, api_key })
    }

    pub(crate) async fn post_json(
        &self,
        operation: &'static str,
        url: &str,
        body: &Value,
    ) -> Result<RawResponse> {
        let request_id = Uuid::new_v4().to_string();
        debug!(operation, url, request_id = %request_id, "sending request");
        let started = Instant::now();

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(REQUEST_ID_HEADER, &request_id)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::Http)?;

        debug!(
            operation,
            request_id = %request_id,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );
        Ok(RawResponse { status, body })
    }
}
