use super::*;
use resale_helper::optimizer::{self, FieldKind, TextOptimizer};
use resale_helper::{AiConfigUpdate, OptimizeError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_title_request_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "temperature": 0.7,
            "max_tokens": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(" Great Title ")))
        .expect(1)
        .mount(&server)
        .await;

    let config = get_test_config(&server, "sk-test");
    let text = optimizer::optimize("old title", FieldKind::Title, &config).await.unwrap();

    assert_eq!(text, "Great Title");
}

#[tokio::test]
async fn test_description_uses_larger_token_bound() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({"max_tokens": 500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Longer copy")))
        .expect(1)
        .mount(&server)
        .await;

    let config = get_test_config(&server, "sk-test");
    let text = optimizer::optimize("plain description", FieldKind::Description, &config)
        .await
        .unwrap();

    assert_eq!(text, "Longer copy");
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = get_test_config(&server, "");
    let err = optimizer::optimize("title", FieldKind::Title, &config).await.unwrap_err();

    assert!(matches!(err, OptimizeError::ConfigMissing));
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = get_test_config(&server, "sk-wrong");
    let err = optimizer::optimize("title", FieldKind::Title, &config).await.unwrap_err();

    assert!(matches!(err, OptimizeError::Unauthorized));
    assert!(err.requires_reconfiguration());
}

#[tokio::test]
async fn test_rate_limited_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let config = get_test_config(&server, "sk-test");
    let err = optimizer::optimize("title", FieldKind::Title, &config).await.unwrap_err();

    assert!(matches!(err, OptimizeError::RateLimited));
}

#[tokio::test]
async fn test_empty_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = get_test_config(&server, "sk-test");
    let err = optimizer::optimize("title", FieldKind::Title, &config).await.unwrap_err();

    assert!(matches!(err, OptimizeError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_server_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "The server had an error while processing your request"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = get_test_config(&server, "sk-test");
    let err = optimizer::optimize("title", FieldKind::Title, &config).await.unwrap_err();

    match err {
        OptimizeError::Transport { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "The server had an error while processing your request");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let config = resale_helper::AiConfig {
        base_url: "http://127.0.0.1:1/v1".to_string(),
        api_key: "sk-test".to_string(),
        ..Default::default()
    };
    let err = optimizer::optimize("title", FieldKind::Title, &config).await.unwrap_err();

    assert!(matches!(err, OptimizeError::Network(_)));
    assert!(!err.requires_reconfiguration());
}

#[tokio::test]
async fn test_reconfigure_after_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer sk-old"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer sk-new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Fresh Title")))
        .expect(1)
        .mount(&server)
        .await;

    let mut optimizer = TextOptimizer::new(get_test_config(&server, "sk-old"));

    let err = optimizer.optimize("title", FieldKind::Title).await.unwrap_err();
    assert!(err.requires_reconfiguration());

    optimizer.update_config(AiConfigUpdate {
        api_key: Some("sk-new".to_string()),
        ..Default::default()
    });
    let text = optimizer.optimize("title", FieldKind::Title).await.unwrap();
    assert_eq!(text, "Fresh Title");
}
