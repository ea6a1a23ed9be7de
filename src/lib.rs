pub mod auth;
pub mod config;
pub mod llm;
pub mod logging;
pub mod models;
pub mod routes;
pub mod store;
pub mod test_util;

pub use auth::{AuthUser, SupabaseAuthClient};
pub use config::Config;
pub use llm::OpenAiClient;
pub use models::audit::{AuditInput, AuditPhases, AuditRecord, AuditResult};
pub use models::roadmap::{Roadmap, RoadmapWeek};
pub use store::AuditStore;

use std::path::Path;
use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Shared application state. Immutable after construction; every request
/// task sees the same configuration and client handles.
pub struct AppState {
    pub config: Config,
    pub auth_client: SupabaseAuthClient,
    pub openai_client: OpenAiClient,
    pub audit_store: AuditStore,
}

/// Assemble the full application router: API routes, CORS, request logging,
/// and the static front-end with its single-page-app fallback.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = Path::new(&state.config.static_dir);
    // ServeDir rejects `..` path components, so requests cannot escape the
    // static root. Unknown paths fall back to index.html for SPA routing.
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::audits::router(state.clone()))
        .merge(routes::roadmap::router(state))
        .fallback_service(static_files)
        .layer(cors)
        .layer(middleware::from_fn(logging::request_logger))
}
