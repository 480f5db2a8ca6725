//! Blocking form of [`crate::PangramClient`].
//!
//! Same operations, same request bodies, same error semantics; calls block
//! the current thread. Must not be used from within an async runtime.

use crate::client::builder::PangramClientBuilder;
use crate::client::operation::{
    finish, warn_deprecated, CheckPlagiarism, Classify, ClassifyBatch, ClassifyWindowed,
    Operation,
};
use crate::config::ClientConfig;
use crate::transport::BlockingTransport;
use crate::types::{ClassificationResult, ClassifyOptions, PlagiarismResult, WindowedResult};
use crate::Result;
use tracing::info;

#[derive(Clone)]
pub struct PangramClient {
    config: ClientConfig,
    transport: BlockingTransport,
}

impl PangramClient {
    pub fn new() -> Result<Self> {
        PangramClientBuilder::new().build_blocking()
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        PangramClientBuilder::new().api_key(api_key).build_blocking()
    }

    pub fn builder() -> PangramClientBuilder {
        PangramClientBuilder::new()
    }

    pub(crate) fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = BlockingTransport::new(config.api_key().to_string(), config.timeout)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn execute<O: Operation>(&self, op: O) -> Result<O::Output> {
        let url = self.config.endpoints.url(op.endpoint());
        let body = op.body(&self.config.source);
        let raw = self.transport.post_json(op.name(), url, &body)?;
        finish(&op, raw)
    }

    pub fn classify(&self, text: &str) -> Result<ClassificationResult> {
        self.execute(Classify::new(text, &ClassifyOptions::default()))
    }

    pub fn classify_with_options(
        &self,
        text: &str,
        options: &ClassifyOptions,
    ) -> Result<ClassificationResult> {
        self.execute(Classify::new(text, options))
    }

    pub fn classify_with_dashboard_link(&self, text: &str) -> Result<ClassificationResult> {
        let options = ClassifyOptions::new().with_dashboard_link(true);
        self.execute(Classify::new(text, &options))
    }

    /// See [`crate::PangramClient::classify_batch`].
    pub fn classify_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<ClassificationResult>> {
        let texts: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
        let op = ClassifyBatch::new(texts, self.config.max_batch_size)?;
        self.execute(op)
    }

    /// See [`crate::PangramClient::classify_chunked`].
    pub fn classify_chunked<S: AsRef<str>>(
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
            results.extend(self.execute(op)?);
        }
        Ok(results)
    }

    pub fn classify_windowed(&self, text: &str) -> Result<WindowedResult> {
        self.execute(ClassifyWindowed::sliding_window(text))
    }

    #[deprecated(
        since = "0.2.0",
        note = "use `classify_windowed`; scheduled for removal after 2027-06-30"
    )]
    pub fn classify_extended(&self, text: &str) -> Result<WindowedResult> {
        warn_deprecated("classify_extended", "classify_windowed");
        self.execute(ClassifyWindowed::extended(text))
    }

    #[deprecated(
        since = "0.2.0",
        note = "use `classify`; scheduled for removal after 2027-06-30"
    )]
    pub fn classify_short(&self, text: &str) -> Result<ClassificationResult> {
        warn_deprecated("classify_short", "classify");
        self.execute(Classify::short(text, &ClassifyOptions::default()))
    }

    pub fn check_plagiarism(&self, text: &str) -> Result<PlagiarismResult> {
        self.execute(CheckPlagiarism::new(text))
    }
}
