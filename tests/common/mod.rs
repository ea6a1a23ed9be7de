#![allow(dead_code)]

use axum::body::Body;
use axum::Router;
use bytes::Bytes;
use http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

use life_audit_backend::app;
use life_audit_backend::test_util::{create_test_state, supabase_user_json};

/// Build the full application router against a single mock server standing
/// in for both Supabase and OpenAI (their paths never collide).
pub fn test_app(server: &MockServer) -> Router {
    test_app_with_static_dir(server, "dist")
}

pub fn test_app_with_static_dir(server: &MockServer, static_dir: &str) -> Router {
    app(create_test_state(&server.uri(), &server.uri(), static_dir))
}

/// Accept `token` at the auth endpoint, resolving it to `user_id`.
pub async fn mount_auth_user(server: &MockServer, token: &str, user_id: &str) {
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/auth/v1/user"))
        .and(matchers::header(
            "authorization",
            format!("Bearer {token}").as_str(),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(supabase_user_json(user_id, Some("user@example.com"))),
        )
        .mount(server)
        .await;
}

/// Reject every token at the auth endpoint.
pub async fn mount_auth_rejection(server: &MockServer) {
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "msg": "invalid JWT: token is expired"
        })))
        .mount(server)
        .await;
}

pub async fn send_request(
    app: &Router,
    method: http::Method,
    uri: &str,
    auth_header: Option<&str>,
    body: Option<Value>,
) -> http::Response<Body> {
    let mut builder = http::Request::builder().method(method).uri(uri);

    if let Some(value) = auth_header {
        builder = builder.header("Authorization", value);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(Bytes::from(json.to_string())))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: http::Response<Body>) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

pub async fn body_json(response: http::Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn assert_unauthorized(response: http::Response<Body>) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Unauthorized"}),
    );
}
