//! Integration tests for plagiarism checks

use crate::integration::mock_server::MockServerFixture;
use mockito::Matcher;
use pangram::Error;
use serde_json::json;

#[tokio::test]
async fn test_plagiarism_response_has_all_fields() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .post("/plagiarism")
        .match_body(Matcher::PartialJson(json!({"text": "hello!"})))
        .with_status(200)
        .with_body(
            json!({
                "text": "hello!",
                "plagiarism_detected": false,
                "plagiarized_content": [],
                "total_sentences": 1,
                "plagiarized_sentences": [],
                "percent_plagiarized": 0.0,
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = fixture.client().check_plagiarism("hello!").await.unwrap();

    assert!(!result.plagiarism_detected);
    assert!(result.plagiarized_content.is_empty());
    assert_eq!(result.total_sentences, 1);
    assert_eq!(result.flagged_count(), 0);
    assert!(result.percent_in_range());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_plagiarism_with_matches() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            "/plagiarism",
            200,
            &json!({
                "plagiarism_detected": true,
                "plagiarized_content": [{
                    "source_url": "https://example.org/tale",
                    "title": "A Tale of Two Cities",
                    "matched_sentences": ["It was the best of times, it was the worst of times."],
                    "similarity": 0.99,
                }],
                "total_sentences": 2,
                "plagiarized_sentences": ["It was the best of times, it was the worst of times."],
                "percent_plagiarized": 50.0,
            })
            .to_string(),
        )
        .await;

    let result = fixture
        .client()
        .check_plagiarism("It was the best of times, it was the worst of times. Then lunch.")
        .await
        .unwrap();

    assert!(result.plagiarism_detected);
    assert_eq!(result.plagiarized_content[0].title.as_deref(), Some("A Tale of Two Cities"));
    assert_eq!(result.percent_plagiarized, 50.0);
}

#[tokio::test]
async fn test_plagiarism_missing_field() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            "/plagiarism",
            200,
            r#"{"plagiarism_detected": false, "plagiarized_content": [], "total_sentences": 1, "percent_plagiarized": 0.0}"#,
        )
        .await;

    let err = fixture.client().check_plagiarism("hello!").await.unwrap_err();

    assert!(matches!(err, Error::Api { .. }));
    assert_eq!(
        err.context().and_then(|c| c.field_path.as_deref()),
        Some("plagiarized_sentences")
    );
}
