use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use life_audit_backend::{app, AppState, AuditStore, Config, OpenAiClient, SupabaseAuthClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; missing credentials fail here, not on first request
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Life Audit backend");

    // One shared outbound client; every external call carries a deadline
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let auth_client = SupabaseAuthClient::new(
        http_client.clone(),
        &config.supabase_url,
        &config.supabase_service_role_key,
    );
    let openai_client = OpenAiClient::new(
        http_client.clone(),
        &config.openai_base_url,
        &config.openai_api_key,
        &config.openai_model,
    );
    let audit_store = AuditStore::new(
        http_client,
        &config.supabase_url,
        &config.supabase_service_role_key,
    );

    if !std::path::Path::new(&config.static_dir).is_dir() {
        tracing::warn!(
            "Static directory '{}' not found; front-end assets will not be served",
            config.static_dir
        );
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState {
        config,
        auth_client,
        openai_client,
        audit_store,
    });

    let app = app(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
