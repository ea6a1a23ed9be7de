mod common;

use http::{Method, StatusCode};
use serde_json::json;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

use life_audit_backend::test_util::mock_openai::MockChatCompletion;
use life_audit_backend::test_util::{sample_audit_result_json, sample_roadmap_json};

use common::{body_json, mount_auth_user, send_request, test_app};

fn latest_audit_row() -> serde_json::Value {
    json!([{
        "id": 7,
        "user_id": "user-1",
        "input_data": {"age": 29},
        "ai_response": sample_audit_result_json(),
        "created_at": "2026-08-01T08:00:00Z"
    }])
}

#[tokio::test]
async fn test_generate_roadmap_from_latest_audit() {
    let server = MockServer::start().await;
    mount_auth_user(&server, "good-token", "user-1").await;

    let roadmap = sample_roadmap_json();

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/rest/v1/audits"))
        .and(matchers::query_param("user_id", "eq.user-1"))
        .and(matchers::query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(latest_audit_row()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/chat/completions"))
        .and(matchers::body_string_contains(
            "Generate a roadmap for this user based on their latest audit",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockChatCompletion::json_object(&roadmap)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server);
    let response = send_request(
        &app,
        Method::POST,
        "/api/generate-roadmap",
        Some("Bearer good-token"),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, roadmap);
}

#[tokio::test]
async fn test_generate_roadmap_without_audit_returns_404() {
    let server = MockServer::start().await;
    mount_auth_user(&server, "good-token", "user-1").await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/rest/v1/audits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    // No audit, no model call.
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app(&server);
    let response = send_request(
        &app,
        Method::POST,
        "/api/generate-roadmap",
        Some("Bearer good-token"),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "No audit found. Please complete an audit first."})
    );
}

#[tokio::test]
async fn test_generate_roadmap_malformed_model_output_fails() {
    let server = MockServer::start().await;
    mount_auth_user(&server, "good-token", "user-1").await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/rest/v1/audits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(latest_audit_row()))
        .mount(&server)
        .await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockChatCompletion::json_object(&json!({"title": "no weeks"}))),
        )
        .mount(&server)
        .await;

    let app = test_app(&server);
    let response = send_request(
        &app,
        Method::POST,
        "/api/generate-roadmap",
        Some("Bearer good-token"),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
