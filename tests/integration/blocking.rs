//! The blocking client shares request building and validation with the async one

use crate::integration::mock_server::{capture_logs, MockServerFixture};
use mockito::Matcher;
use pangram::blocking::PangramClient;
use pangram::config::SOURCE_VERSION;
use pangram::Error;
use serde_json::json;

fn client(fixture: &MockServerFixture) -> PangramClient {
    fixture
        .builder()
        .max_batch_size(2)
        .build_blocking()
        .expect("Failed to build blocking client")
}

#[test]
fn test_blocking_classify() {
    let mut fixture = MockServerFixture::new_blocking();
    let mock = fixture
        .post("/classify")
        .match_body(Matcher::Json(json!({"text": "hi", "source": SOURCE_VERSION})))
        .with_status(200)
        .with_body(r#"{"text": "hi", "ai_likelihood": 0.1, "prediction": "Human"}"#)
        .create();

    let result = client(&fixture).classify("hi").unwrap();

    assert!(result.echoes("hi"));
    mock.assert();
}

#[test]
fn test_blocking_status_error() {
    let mut fixture = MockServerFixture::new_blocking();
    let _mock = fixture.post("/classify").with_status(500).with_body("boom").create();

    let err = client(&fixture).classify("hi").unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), Some("boom"));
}

#[test]
fn test_blocking_in_band_error() {
    let mut fixture = MockServerFixture::new_blocking();
    let _mock = fixture
        .post("/sliding-window")
        .with_status(200)
        .with_body(r#"{"error": "bad input"}"#)
        .create();

    let err = client(&fixture).classify_windowed("hi").unwrap_err();
    assert_eq!(err.message(), Some("bad input"));
}

#[test]
fn test_blocking_oversized_batch_sends_nothing() {
    let mut fixture = MockServerFixture::new_blocking();
    let mock = fixture.server.mock("POST", "/batch").expect(0).create();

    let err = client(&fixture).classify_batch(&["a", "b", "c"]).unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    mock.assert();
}

#[test]
fn test_blocking_chunked() {
    let mut fixture = MockServerFixture::new_blocking();
    let first = fixture
        .post("/batch")
        .match_body(Matcher::PartialJson(json!({"text": ["a", "b"]})))
        .with_status(200)
        .with_body(r#"{"responses": [{"text": "a"}, {"text": "b"}]}"#)
        .create();
    let second = fixture
        .post("/batch")
        .match_body(Matcher::PartialJson(json!({"text": ["c"]})))
        .with_status(200)
        .with_body(r#"{"responses": [{"text": "c"}]}"#)
        .create();

    let results = client(&fixture).classify_chunked(&["a", "b", "c"]).unwrap();

    let echoed: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(echoed, ["a", "b", "c"]);
    first.assert();
    second.assert();
}

#[test]
fn test_blocking_plagiarism_and_dashboard() {
    let mut fixture = MockServerFixture::new_blocking();
    let _plagiarism = fixture
        .post("/plagiarism")
        .with_status(200)
        .with_body(r#"{"plagiarism_detected": false, "plagiarized_content": [], "total_sentences": 1, "plagiarized_sentences": [], "percent_plagiarized": 0.0}"#)
        .create();
    let _dashboard = fixture
        .post("/classify")
        .match_body(Matcher::PartialJson(json!({"public_dashboard_link": true})))
        .with_status(200)
        .with_body(r#"{"text": "hello!", "dashboard_link": "https://www.pangram.com/history/1"}"#)
        .create();

    let client = client(&fixture);
    assert!(!client.check_plagiarism("hello!").unwrap().plagiarism_detected);
    let dashboard = client.classify_with_dashboard_link("hello!").unwrap();
    assert!(dashboard.dashboard_link.is_some());
}

#[test]
#[allow(deprecated)]
fn test_blocking_deprecated_operations() {
    let mut fixture = MockServerFixture::new_blocking();
    let _short = fixture
        .post("/short")
        .with_status(200)
        .with_body(r#"{"text": "x", "likelihood": 0.4}"#)
        .create();
    let _extended = fixture
        .post("/extended")
        .with_status(200)
        .with_body(r#"{"text": "x", "windows": [{"text": "x", "start_index": 0, "end_index": 1}]}"#)
        .create();

    let client = client(&fixture);
    let (dispatch, logs) = capture_logs();
    tracing::dispatcher::with_default(&dispatch, || {
        assert_eq!(client.classify_short("x").unwrap().score(), Some(0.4));
        assert_eq!(client.classify_extended("x").unwrap().windows.len(), 1);
    });

    let logs = logs.contents();
    assert_eq!(logs.matches("WARN").count(), 2);
    assert!(logs.contains("classify_short is deprecated"));
    assert!(logs.contains("classify_extended is deprecated"));
    assert!(logs.contains("2027-06-30"));
}

#[test]
fn test_blocking_missing_credential() {
    let err = PangramClient::builder()
        .api_key_env("PANGRAM_TEST_BLOCKING_NEVER_SET")
        .build_blocking()
        .err()
        .expect("construction should fail");
    assert!(matches!(err, Error::Configuration { .. }));
}
