use crate::client::core::PangramClient;
use crate::config::{
    self, ClientConfig, Endpoint, Endpoints, API_KEY_ENV, DEFAULT_MAX_BATCH_SIZE,
    DEFAULT_TIMEOUT, SOURCE_VERSION,
};
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Credential resolution happens in [`PangramClientBuilder::build`] and
/// nowhere else: an explicit key wins, otherwise the environment variable
/// (default `PANGRAM_API_KEY`) is read.
pub struct PangramClientBuilder {
    api_key: Option<String>,
    api_key_env: String,
    endpoints: Endpoints,
    timeout: Option<Duration>,
    max_batch_size: usize,
    source: String,
}

impl PangramClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            api_key_env: API_KEY_ENV.to_string(),
            endpoints: Endpoints::default(),
            timeout: None,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            source: SOURCE_VERSION.to_string(),
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Read the key from a different environment variable.
    pub fn api_key_env(mut self, var: impl Into<String>) -> Self {
        self.api_key_env = var.into();
        self
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Point a single operation family at another URL.
    pub fn endpoint(mut self, endpoint: Endpoint, url: impl Into<String>) -> Self {
        self.endpoints.set(endpoint, url);
        self
    }

    /// Serve every endpoint from one host. See [`Endpoints::with_base_url`].
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.endpoints = Endpoints::with_base_url(base_url.as_ref());
        self
    }

    /// Per-call timeout. Defaults to `PANGRAM_HTTP_TIMEOUT_SECS`, else 90 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn max_batch_size(mut self, n: usize) -> Self {
        self.max_batch_size = n.max(1);
        self
    }

    /// Override the `source` tag sent with every request.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub(crate) fn resolve(self) -> Result<ClientConfig> {
        let api_key = config::resolve_api_key(self.api_key, &self.api_key_env)?;
        self.endpoints.validate()?;
        let timeout = self
            .timeout
            .or_else(config::timeout_from_env)
            .unwrap_or(DEFAULT_TIMEOUT);
        Ok(ClientConfig::new(
            api_key,
            self.endpoints,
            timeout,
            self.max_batch_size,
            self.source,
        ))
    }

    /// Build the async client.
    pub fn build(self) -> Result<PangramClient> {
        PangramClient::from_config(self.resolve()?)
    }

    /// Build the blocking client.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<crate::blocking::PangramClient> {
        crate::blocking::PangramClient::from_config(self.resolve()?)
    }
}

impl Default for PangramClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
