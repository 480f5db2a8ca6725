//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use pangram::{PangramClient, PangramClientBuilder};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "test-key";

/// Test fixture that owns a mock server and builds clients pointed at it
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        init_tracing();
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Fixture for blocking tests; must not be called inside a tokio runtime.
    pub fn new_blocking() -> Self {
        init_tracing();
        let server = Server::new();
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Builder with the test key and every endpoint on the mock server
    pub fn builder(&self) -> PangramClientBuilder {
        PangramClient::builder()
            .api_key(TEST_API_KEY)
            .base_url(&self.base_url)
    }

    pub fn client(&self) -> PangramClient {
        self.builder().build().expect("Failed to build client")
    }

    /// POST mock on `path` that only matches authenticated JSON requests
    pub fn post(&mut self, path: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("x-api-key", TEST_API_KEY)
            .match_header("content-type", "application/json")
    }

    /// Create a mock for a JSON response
    pub async fn mock_json_response(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.post(path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock that must never be hit
    pub async fn mock_unreachable(&mut self, path: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_body(Matcher::Any)
            .expect(0)
            .create_async()
            .await
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shared buffer that collects formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Subscriber that records WARN and above into the returned buffer.
pub fn capture_logs() -> (tracing::Dispatch, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();
    (tracing::Dispatch::new(subscriber), buffer)
}
