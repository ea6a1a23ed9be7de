use std::sync::Arc;
use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use crate::models::audit::{AuditInput, AuditRecord, AuditResult};
use crate::routes::ApiError;
use crate::AppState;

/// POST /api/generate-audit - analyze submitted life data and persist the result.
async fn generate_audit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(input): Json<AuditInput>,
) -> Result<Json<AuditResult>, ApiError> {
    let user = state.auth_client.authenticate(&headers).await?;

    tracing::info!("Generating audit for user {}", user.id);

    let result = state.openai_client.generate_audit(&input).await?;

    // Persisted only after the analysis validates; attribution always comes
    // from the verified identity, never from the request body.
    state
        .audit_store
        .insert_audit(&user.id, &input, &result)
        .await?;

    Ok(Json(result))
}

/// GET /api/my-audits - the caller's audit history, newest first.
async fn my_audits(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<AuditRecord>>, ApiError> {
    let user = state.auth_client.authenticate(&headers).await?;

    let records = state.audit_store.list_audits(&user.id).await?;
    Ok(Json(records))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate-audit", post(generate_audit))
        .route("/api/my-audits", get(my_audits))
        .with_state(state)
}
