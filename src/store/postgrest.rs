use reqwest::Client;
use serde_json::json;

use crate::models::audit::{AuditInput, AuditRecord, AuditResult};

/// Client for the `audits` table behind Supabase's PostgREST endpoint.
///
/// Rows are append-only: this service inserts and reads, never updates or
/// deletes. Reads are always filtered by a server-side `user_id` predicate
/// built from the authenticated identity.
pub struct AuditStore {
    http_client: Client,
    base_url: String,
    service_role_key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    RequestFailed(String),
    #[error("Store error: {0}")]
    Api(String),
    #[error("Invalid store response: {0}")]
    InvalidResponse(String),
}

impl AuditStore {
    pub fn new(http_client: Client, base_url: &str, service_role_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
        }
    }

    fn audits_url(&self) -> String {
        format!("{}/rest/v1/audits", self.base_url)
    }

    /// Append an audit row attributed to `user_id`. The id must come from the
    /// identity verified in the current request.
    pub async fn insert_audit(
        &self,
        user_id: &str,
        input: &AuditInput,
        result: &AuditResult,
    ) -> Result<(), StoreError> {
        let row = json!({
            "user_id": user_id,
            "input_data": input,
            "ai_response": result,
        });

        let response = self
            .http_client
            .post(self.audits_url())
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api(format!("{}: {}", status, body)));
        }

        tracing::debug!("Inserted audit for user {}", user_id);
        Ok(())
    }

    /// All audit rows for `user_id`, newest first.
    pub async fn list_audits(&self, user_id: &str) -> Result<Vec<AuditRecord>, StoreError> {
        self.query_audits(user_id, None).await
    }

    /// The most recent audit row for `user_id`, if any.
    pub async fn latest_audit(&self, user_id: &str) -> Result<Option<AuditRecord>, StoreError> {
        let rows = self.query_audits(user_id, Some(1)).await?;
        Ok(rows.into_iter().next())
    }

    async fn query_audits(
        &self,
        user_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<AuditRecord>, StoreError> {
        let mut query = vec![
            ("select".to_string(), "*".to_string()),
            ("user_id".to_string(), format!("eq.{}", user_id)),
            ("order".to_string(), "created_at.desc".to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("limit".to_string(), limit.to_string()));
        }

        let response = self
            .http_client
            .get(self.audits_url())
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api(format!("{}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }
}
