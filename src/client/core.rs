use crate::client::builder::PangramClientBuilder;
use crate::client::operation::{
    finish, warn_deprecated, CheckPlagiarism, Classify, ClassifyBatch, ClassifyWindowed,
    Operation,
};
use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::types::{ClassificationResult, ClassifyOptions, PlagiarismResult, WindowedResult};
use crate::Result;
use tracing::info;

/// Async client for the Pangram text classification API.
///
/// Holds an immutable configuration and a connection handle; cloning is cheap
/// and concurrent calls need no coordination. Every call is a single POST;
/// nothing is retried or cached.
#[derive(Clone)]
pub struct PangramClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl PangramClient {
    /// Client with the key taken from `PANGRAM_API_KEY`.
    pub fn new() -> Result<Self> {
        PangramClientBuilder::new().build()
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        PangramClientBuilder::new().api_key(api_key).build()
    }

    pub fn builder() -> PangramClientBuilder {
        PangramClientBuilder::new()
    }

    pub(crate) fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.api_key().to_string(), config.timeout)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn execute<O: Operation>(&self, op: O) -> Result<O::Output> {
        let url = self.config.endpoints.url(op.endpoint());
        let body = op.body(&self.config.source);
        let raw = self.transport.post_json(op.name(), url, &body).await?;
        finish(&op, raw)
    }

    /// Classify `text` as AI- or human-written.
    ///
    /// Long inputs may come back with a `windows` breakdown.
    pub async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        self.execute(Classify::new(text, &ClassifyOptions::default()))
            .await
    }

    pub async fn classify_with_options(
        &self,
        text: &str,
        options: &ClassifyOptions,
    ) -> Result<ClassificationResult> {
        self.execute(Classify::new(text, options)).await
    }

    /// Classify and request a public dashboard URL; the result's
    /// `dashboard_link` is guaranteed to be set.
    pub async fn classify_with_dashboard_link(&self, text: &str) -> Result<ClassificationResult> {
        let options = ClassifyOptions::new().with_dashboard_link(true);
        self.execute(Classify::new(text, &options)).await
    }

    /// Classify up to `max_batch_size` texts in one request.
    ///
    /// Larger (or empty) batches fail with `Error::Validation` before any
    /// request is sent; use [`PangramClient::classify_chunked`] to split them.
    /// Results are in input order.
    pub async fn classify_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Result<Vec<ClassificationResult>> {
        let texts: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
        let op = ClassifyBatch::new(texts, self.config.max_batch_size)?;
        self.execute(op).await
    }

    /// Classify any number of texts, one batch request per `max_batch_size`
    /// chunk. Chunks are sent sequentially and results concatenated in input
    /// order; the first failing chunk aborts the call.
    pub async fn classify_chunked<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Result<Vec<ClassificationResult>> {
        let texts: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
        let max = self.config.max_batch_size;
        let mut results = Vec::with_capacity(texts.len());
        for (index, chunk) in texts.chunks(max).enumerate() {
            info!(
                chunk = index,
                size = chunk.len(),
                total = texts.len(),
                "classifying batch chunk"
            );
            let op = ClassifyBatch::new(chunk.to_vec(), max)?;
            results.extend(self.execute(op).await?);
        }
        Ok(results)
    }

    /// Sliding-window classification of a long document.
    pub async fn classify_windowed(&self, text: &str) -> Result<WindowedResult> {
        self.execute(ClassifyWindowed::sliding_window(text)).await
    }

    #[deprecated(
        since = "0.2.0",
        note = "use `classify_windowed`; scheduled for removal after 2027-06-30"
    )]
    pub async fn classify_extended(&self, text: &str) -> Result<WindowedResult> {
        warn_deprecated("classify_extended", "classify_windowed");
        self.execute(ClassifyWindowed::extended(text)).await
    }

    #[deprecated(
        since = "0.2.0",
        note = "use `classify`; scheduled for removal after 2027-06-30"
    )]
    pub async fn classify_short(&self, text: &str) -> Result<ClassificationResult> {
        warn_deprecated("classify_short", "classify");
        self.execute(Classify::short(text, &ClassifyOptions::default()))
            .await
    }

    pub async fn check_plagiarism(&self, text: &str) -> Result<PlagiarismResult> {
        self.execute(CheckPlagiarism::new(text)).await
    }
}
