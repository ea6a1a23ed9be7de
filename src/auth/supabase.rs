use axum::http::HeaderMap;
use reqwest::Client;
use serde::Deserialize;

/// Authenticated user resolved by the Supabase auth service.
///
/// Never constructed from client input; the only way to obtain one is a
/// successful token exchange.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingHeader,
    #[error("Invalid Authorization header format")]
    InvalidFormat,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Auth provider error: {0}")]
    ProviderError(String),
}

/// User object returned by `GET /auth/v1/user`.
#[derive(Debug, Deserialize)]
struct SupabaseUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Client for exchanging bearer tokens with the Supabase auth service.
pub struct SupabaseAuthClient {
    http_client: Client,
    base_url: String,
    service_role_key: String,
}

/// Extract the token from a `Bearer <token>` Authorization header.
/// Any other header shape is rejected before any network call is made.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get("authorization")
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidFormat)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidFormat)?;

    if token.is_empty() {
        return Err(AuthError::InvalidFormat);
    }

    Ok(token)
}

impl SupabaseAuthClient {
    pub fn new(http_client: Client, base_url: &str, service_role_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
        }
    }

    /// Authenticate a request by exchanging its bearer token for a user.
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthUser, AuthError> {
        let token = bearer_token(headers)?;

        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.service_role_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::ProviderError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidToken(format!(
                "auth service returned {}",
                response.status()
            )));
        }

        let user: SupabaseUser = response
            .json()
            .await
            .map_err(|e| AuthError::ProviderError(e.to_string()))?;

        Ok(AuthUser {
            id: user.id,
            email: user.email,
        })
    }
}
