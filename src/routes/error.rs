use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::AuthError;
use crate::llm::OpenAiError;
use crate::store::StoreError;

/// Failure of a processing endpoint, mapped deliberately to a status code.
///
/// Auth failures always collapse to a generic 401 body; the underlying detail
/// is logged server-side and never sent to the client. Analysis and store
/// failures surface their message in the 500 body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Analysis(#[from] OpenAiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("No audit found. Please complete an audit first.")]
    NoAudit,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Auth(err) => {
                tracing::warn!("Authentication failed: {}", err);
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            ApiError::NoAudit => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Analysis(err) => {
                tracing::error!("Audit analysis failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Store(err) => {
                tracing::error!("Audit store failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
