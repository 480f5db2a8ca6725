//! Client configuration: credential, endpoint set, timeout and batch limit.
//!
//! A [`ClientConfig`] is produced once by the builder and never changes for
//! the lifetime of a client.

use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "PANGRAM_API_KEY";
/// Overrides [`DEFAULT_TIMEOUT`] when the builder was not given a timeout.
pub const TIMEOUT_ENV: &str = "PANGRAM_HTTP_TIMEOUT_SECS";

/// Long per-call timeout; large documents take tens of seconds to classify.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);
pub const DEFAULT_MAX_BATCH_SIZE: usize = 32;

/// Value sent in the `source` field of every request.
pub const SOURCE_VERSION: &str = concat!("rust_sdk_", env!("CARGO_PKG_VERSION"));

/// Service endpoints, one per operation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Classify,
    Batch,
    SlidingWindow,
    Extended,
    Short,
    Plagiarism,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Classify,
        Endpoint::Batch,
        Endpoint::SlidingWindow,
        Endpoint::Extended,
        Endpoint::Short,
        Endpoint::Plagiarism,
    ];

    /// Path appended by [`Endpoints::with_base_url`].
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Classify => "/classify",
            Endpoint::Batch => "/batch",
            Endpoint::SlidingWindow => "/sliding-window",
            Endpoint::Extended => "/extended",
            Endpoint::Short => "/short",
            Endpoint::Plagiarism => "/plagiarism",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Classify => "classify",
            Endpoint::Batch => "batch",
            Endpoint::SlidingWindow => "sliding_window",
            Endpoint::Extended => "extended",
            Endpoint::Short => "short",
            Endpoint::Plagiarism => "plagiarism",
        };
        f.write_str(name)
    }
}

/// Full URL for each [`Endpoint`].
///
/// The paths are owned by the service; the defaults point at the public
/// Pangram Labs deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub classify: String,
    pub batch: String,
    pub sliding_window: String,
    pub extended: String,
    pub short: String,
    pub plagiarism: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            classify: "https://text.api.pangramlabs.com".to_string(),
            batch: "https://text-batch.api.pangramlabs.com".to_string(),
            sliding_window: "https://text-sliding.api.pangramlabs.com".to_string(),
            extended: "https://text-extended.api.pangramlabs.com".to_string(),
            short: "https://text-short.api.pangramlabs.com".to_string(),
            plagiarism: "https://plagiarism.api.pangramlabs.com".to_string(),
        }
    }
}

impl Endpoints {
    /// Every endpoint under one host, at [`Endpoint::path`].
    ///
    /// Used for staging deployments and mock servers.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let at = |e: Endpoint| format!("{}{}", base, e.path());
        Self {
            classify: at(Endpoint::Classify),
            batch: at(Endpoint::Batch),
            sliding_window: at(Endpoint::SlidingWindow),
            extended: at(Endpoint::Extended),
            short: at(Endpoint::Short),
            plagiarism: at(Endpoint::Plagiarism),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Classify => &self.classify,
            Endpoint::Batch => &self.batch,
            Endpoint::SlidingWindow => &self.sliding_window,
            Endpoint::Extended => &self.extended,
            Endpoint::Short => &self.short,
            Endpoint::Plagiarism => &self.plagiarism,
        }
    }

    pub fn set(&mut self, endpoint: Endpoint, url: impl Into<String>) {
        let url = url.into();
        match endpoint {
            Endpoint::Classify => self.classify = url,
            Endpoint::Batch => self.batch = url,
            Endpoint::SlidingWindow => self.sliding_window = url,
            Endpoint::Extended => self.extended = url,
            Endpoint::Short => self.short = url,
            Endpoint::Plagiarism => self.plagiarism = url,
        }
    }

    /// Every URL must parse and use http or https.
    pub fn validate(&self) -> Result<()> {
        for endpoint in Endpoint::ALL {
            let raw = self.url(endpoint);
            let parsed = Url::parse(raw).map_err(|e| {
                Error::configuration_with_context(
                    format!("Invalid endpoint URL: {}", e),
                    ErrorContext::new()
                        .with_field_path(format!("endpoints.{}", endpoint))
                        .with_details(raw.to_string()),
                )
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::configuration_with_context(
                    format!("Unsupported endpoint scheme '{}'", parsed.scheme()),
                    ErrorContext::new().with_field_path(format!("endpoints.{}", endpoint)),
                ));
            }
        }
        Ok(())
    }
}

/// Resolved, immutable client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    pub endpoints: Endpoints,
    pub timeout: Duration,
    pub max_batch_size: usize,
    pub source: String,
}

impl ClientConfig {
    pub(crate) fn new(
        api_key: String,
        endpoints: Endpoints,
        timeout: Duration,
        max_batch_size: usize,
        source: String,
    ) -> Self {
        Self {
            api_key,
            endpoints,
            timeout,
            max_batch_size,
            source,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout)
            .field("max_batch_size", &self.max_batch_size)
            .field("source", &self.source)
            .finish()
    }
}

/// Picks the explicit key, else the environment variable `env_var`.
///
/// Blank values count as missing.
pub(crate) fn resolve_api_key(explicit: Option<String>, env_var: &str) -> Result<String> {
    explicit
        .filter(|k| !k.trim().is_empty())
        .or_else(|| std::env::var(env_var).ok().filter(|k| !k.trim().is_empty()))
        .ok_or_else(|| {
            Error::configuration_with_context(
                format!(
                    "API key is required. Set the environment variable {} or pass it as an argument.",
                    env_var
                ),
                ErrorContext::new().with_source("client_builder"),
            )
        })
}

pub(crate) fn timeout_from_env() -> Option<Duration> {
    std::env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
