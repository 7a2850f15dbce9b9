use std::time::Duration;

use analyst_client::{AnalysisApi, AnalysisRequest, ApiError, ClientSettings, Endpoint, ReqwestApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestApi {
    let endpoint = Endpoint::from_base(&server.uri()).expect("mock server base url");
    ReqwestApi::new(endpoint, ClientSettings::default()).expect("build client")
}

fn sample_request() -> AnalysisRequest {
    AnalysisRequest {
        url: "https://example.com".to_string(),
        query: "What is the title?".to_string(),
    }
}

#[tokio::test]
async fn analyze_posts_json_and_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "url": "https://example.com",
            "query": "What is the title?",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ops_summary": "Visited 1 page",
            "answer": "Example Domain",
            "sources": ["https://example.com"],
            "quotes": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let response = api.analyze(&sample_request()).await.expect("analyze ok");

    assert_eq!(response.ops_summary, "Visited 1 page");
    assert_eq!(response.answer, "Example Domain");
    assert_eq!(response.sources, vec!["https://example.com".to_string()]);
    assert_eq!(response.quotes, Vec::<String>::new());
}

#[tokio::test]
async fn analyze_defaults_missing_sources_and_quotes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ops_summary": "Visited 1 page",
            "answer": "Example Domain",
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let response = api.analyze(&sample_request()).await.expect("analyze ok");

    assert!(response.sources.is_empty());
    assert!(response.quotes.is_empty());
}

#[tokio::test]
async fn analyze_fails_on_http_status_without_reading_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({
                "error": "Analysis failed: boom",
                "details": "server detail that must stay hidden",
            })),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.analyze(&sample_request()).await.unwrap_err();

    assert_eq!(err, ApiError::HttpStatus(500));
    assert!(err.is_transport());
}

#[tokio::test]
async fn analyze_reports_decode_error_for_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ops_summary": "Visited 1 page",
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.analyze(&sample_request()).await.unwrap_err();

    match err {
        ApiError::Decode(message) => {
            assert!(!message.is_empty());
            assert!(!ApiError::Decode(message).is_transport());
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn analyze_times_out_when_deadline_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({
                    "ops_summary": "slow",
                    "answer": "slow",
                })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    };
    let endpoint = Endpoint::from_base(&server.uri()).expect("mock server base url");
    let api = ReqwestApi::new(endpoint, settings).expect("build client");

    let err = api.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
}

#[tokio::test]
async fn health_reports_backend_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "service": "Worker Bee API",
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let report = api.health().await.expect("health ok");

    assert_eq!(report.status, "healthy");
    assert_eq!(report.service, "Worker Bee API");
    assert_eq!(report.note, None);
}
