//! Client construction and credential resolution

use crate::integration::mock_server::MockServerFixture;
use pangram::{Endpoint, Error, PangramClient};

#[tokio::test]
async fn test_missing_credential_fails_without_network() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_unreachable("/classify").await;

    let result = PangramClient::builder()
        .api_key_env("PANGRAM_TEST_MISSING_KEY_NEVER_SET")
        .base_url(&fixture.base_url)
        .build();

    let err = result.err().expect("construction should fail");
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("API key is required"));
    assert_eq!(err.code().category(), "client");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_credential_from_environment() {
    std::env::set_var("PANGRAM_TEST_ENV_KEY", "env-key");
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/classify")
        .match_header("x-api-key", "env-key")
        .with_status(200)
        .with_body(r#"{"text": "hi"}"#)
        .create_async()
        .await;

    let client = PangramClient::builder()
        .api_key_env("PANGRAM_TEST_ENV_KEY")
        .base_url(&fixture.base_url)
        .build()
        .unwrap();
    assert_eq!(client.config().api_key(), "env-key");

    client.classify("hi").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_single_endpoint_override() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_response("/v3/plagiarism-check", 200, r#"{"plagiarism_detected": false, "plagiarized_content": [], "total_sentences": 0, "plagiarized_sentences": [], "percent_plagiarized": 0.0}"#)
        .await;

    let client = fixture
        .builder()
        .endpoint(
            Endpoint::Plagiarism,
            format!("{}/v3/plagiarism-check", fixture.base_url),
        )
        .build()
        .unwrap();

    client.check_plagiarism("").await.unwrap();
    mock.assert_async().await;
}

#[test]
fn test_with_api_key_uses_default_endpoints() {
    let client = PangramClient::with_api_key("explicit").unwrap();
    assert_eq!(client.config().api_key(), "explicit");
    assert_eq!(
        client.config().endpoints.url(Endpoint::Classify),
        "https://text.api.pangramlabs.com"
    );
}
