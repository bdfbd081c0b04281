//! Generation API Contract Tests
//!
//! Checks the exact `generateContent` request the client sends and how every
//! kind of reply maps to an answer or a `GenerationError`.

use std::sync::Arc;
use std::time::Duration;

use edunexus::app::App;
use edunexus::core::GenerationService;
use edunexus::services::api::GeminiClient;
use lib_core::{Config, GenerationError, Subject, FALLBACK_MESSAGE};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

fn config_for(server: &MockServer) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        generation_endpoint: server.uri(),
        ..Config::default()
    }
}

fn answer_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_request_format_and_answer_text() {
    let server = MockServer::start().await;
    let prompt = "Physics: Explain this concept in simple terms: inertia";

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({ "contents": [{ "parts": [{ "text": prompt }] }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("Objects keep doing what they do.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server));
    let answer = client.generate(prompt).await.unwrap();

    assert_eq!(answer, "Objects keep doing what they do.");
}

#[tokio::test]
async fn test_model_comes_from_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        generation_model: "gemini-1.5-flash".to_string(),
        ..config_for(&server)
    };
    let answer = GeminiClient::new(&config).generate("hi").await.unwrap();
    assert_eq!(answer, "ok");
}

// ────────────────────────────────────────────────────────────────────────────
// Error mapping
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_status_uses_api_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "PERMISSION_DENIED"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = GeminiClient::new(&config_for(&server)).generate("q").await.unwrap_err();

    assert_eq!(
        err,
        GenerationError::Status {
            status: 403,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_error_status_with_plain_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = GeminiClient::new(&config_for(&server)).generate("q").await.unwrap_err();

    assert!(matches!(
        err,
        GenerationError::Status { status: 503, ref message } if message == "upstream unavailable"
    ));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = GeminiClient::new(&config_for(&server)).generate("q").await.unwrap_err();
    assert!(matches!(err, GenerationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_no_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = GeminiClient::new(&config_for(&server)).generate("q").await.unwrap_err();
    assert_eq!(err, GenerationError::EmptyResponse(None));
}

#[tokio::test]
async fn test_blocked_prompt_reports_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = GeminiClient::new(&config_for(&server)).generate("q").await.unwrap_err();
    assert_eq!(err, GenerationError::EmptyResponse(Some("SAFETY".to_string())));
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = Config {
        api_key: None,
        ..config_for(&server)
    };
    let err = GeminiClient::new(&config).generate("q").await.unwrap_err();
    assert_eq!(err, GenerationError::MissingCredential);
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(answer_body("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Config {
        request_timeout_secs: 1,
        ..config_for(&server)
    };
    let err = GeminiClient::new(&config).generate("q").await.unwrap_err();
    assert_eq!(err, GenerationError::Timeout);
}

// ────────────────────────────────────────────────────────────────────────────
// End to end through the app
// ────────────────────────────────────────────────────────────────────────────

/// Drain events until the in-flight flag drops, or give up after ~5 s.
async fn settle(app: &mut App) {
    for _ in 0..100 {
        app.on_tick();
        if !app.state.read().query.is_in_flight() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("query never settled");
}

#[tokio::test]
async fn test_app_submit_shows_answer_with_subject_context() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_json(json!({
            "contents": [{ "parts": [{ "text": "Chemistry: Explain this concept in simple terms: pH" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("How acidic a liquid is.")))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let mut app = App::with_service(Arc::new(GeminiClient::new(&config)), &config);

    app.handle_explore(Subject::Chemistry);
    app.handle_back();
    app.handle_query_input("pH".to_string());
    assert!(app.handle_search_submit().is_some());
    assert!(app.state.read().query.is_in_flight());

    settle(&mut app).await;
    assert_eq!(app.state.read().query.result(), "How acidic a liquid is.");
}

#[tokio::test]
async fn test_app_failure_shows_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let mut app = App::with_service(Arc::new(GeminiClient::new(&config)), &config);

    app.handle_query_input("entropy".to_string());
    app.handle_search_submit();
    settle(&mut app).await;

    assert_eq!(app.state.read().query.result(), FALLBACK_MESSAGE);
}
