use std::sync::Arc;
use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};

use crate::models::roadmap::Roadmap;
use crate::routes::ApiError;
use crate::AppState;

/// POST /api/generate-roadmap - build a 12-week roadmap from the caller's
/// latest audit. Requires at least one completed audit; the roadmap is
/// returned directly and not persisted.
async fn generate_roadmap(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Roadmap>, ApiError> {
    let user = state.auth_client.authenticate(&headers).await?;

    let latest = state
        .audit_store
        .latest_audit(&user.id)
        .await?
        .ok_or(ApiError::NoAudit)?;

    tracing::info!("Generating roadmap for user {}", user.id);

    let roadmap = state.openai_client.generate_roadmap(&latest).await?;
    Ok(Json(roadmap))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate-roadmap", post(generate_roadmap))
        .with_state(state)
}
