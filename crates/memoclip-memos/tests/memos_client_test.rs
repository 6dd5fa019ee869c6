//! Integration tests for the Memos client against a mock server.

use memoclip_core::{Error, MemoSink, Secret, SubmissionError, TagSource};
use memoclip_memos::MemosClient;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MemosClient {
    MemosClient::new(&server.uri(), Secret::new("test-token"), None)
        .expect("Failed to create client")
}

// =============================================================================
// list_tags
// =============================================================================

#[tokio::test]
async fn test_list_tags_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tags": [{"name": "工作"}, {"name": "学习"}, {"name": ""}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tags = client_for(&mock_server).list_tags().await.unwrap();
    assert_eq!(tags, vec!["工作", "学习"]);
}

#[tokio::test]
async fn test_list_tags_non_success_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"code": 16, "message": "unauthenticated"})),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_tags().await.unwrap_err();
    match err {
        Error::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "unauthenticated");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_tags_unexpected_shape_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tags": "not-a-list"
        })))
        .mount(&mock_server)
        .await;

    assert!(client_for(&mock_server).list_tags().await.is_err());
}

#[tokio::test]
async fn test_list_tags_missing_tags_field_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let tags = client_for(&mock_server).list_tags().await.unwrap();
    assert!(tags.is_empty());
}

// =============================================================================
// create_memo
// =============================================================================

#[tokio::test]
async fn test_create_memo_posts_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/memos"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"content": "hello\n\n#a #b"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "memos/abc123",
            "content": "hello\n\n#a #b"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let memo = client_for(&mock_server)
        .create_memo("hello\n\n#a #b")
        .await
        .unwrap();
    assert_eq!(memo.name.as_deref(), Some("memos/abc123"));
}

#[tokio::test]
async fn test_create_memo_accepts_any_2xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/memos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let memo = client_for(&mock_server).create_memo("hi").await.unwrap();
    assert!(memo.name.is_none());
}

#[tokio::test]
async fn test_create_memo_api_error_includes_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/memos"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "not found"})),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).create_memo("hi").await.unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, SubmissionError::Api { status: 404, .. }));
    assert!(message.contains("404"), "message was {}", message);
    assert!(message.contains("not found"), "message was {}", message);
}

#[tokio::test]
async fn test_create_memo_api_error_falls_back_to_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/memos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).create_memo("hi").await.unwrap_err();
    assert_eq!(err.to_string(), "API Error: 500 - Internal Server Error");
}

#[tokio::test]
async fn test_create_memo_trailing_slash_in_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/memos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = format!("{}/", mock_server.uri());
    let client = MemosClient::new(&base, Secret::new("t"), None).unwrap();
    assert!(client.create_memo("hi").await.is_ok());
}

#[tokio::test]
async fn test_create_memo_unresolvable_host_is_network_error() {
    let client = MemosClient::new("http://memos.invalid", Secret::new("t"), None).unwrap();

    let err = client.create_memo("hi").await.unwrap_err();
    assert!(
        matches!(err, SubmissionError::Network { .. }),
        "Expected network error, got {:?}",
        err
    );
    assert_eq!(err.to_string(), "Network error: Cannot reach Memos server");

    let api_err = SubmissionError::Api {
        status: 404,
        message: "not found".to_string(),
    };
    assert_ne!(err.to_string(), api_err.to_string());
}

#[tokio::test]
async fn test_create_memo_connection_refused_is_network_error() {
    // Port 9 (discard) is not served in test environments.
    let client = MemosClient::new("http://127.0.0.1:9", Secret::new("t"), None).unwrap();

    let err = client.create_memo("hi").await.unwrap_err();
    assert!(matches!(err, SubmissionError::Network { .. }));
}

#[tokio::test]
async fn test_create_memo_malformed_url_is_request_error() {
    let client = MemosClient::new("not a url", Secret::new("t"), None).unwrap();

    let err = client.create_memo("hi").await.unwrap_err();
    assert!(
        matches!(err, SubmissionError::Request(_)),
        "Expected request error, got {:?}",
        err
    );
    assert!(err.to_string().starts_with("Request failed: "));
}
