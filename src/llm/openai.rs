use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::llm::prompts::{ROADMAP_PROMPT, SYSTEM_PROMPT};
use crate::models::audit::{AuditInput, AuditRecord, AuditResult};
use crate::models::roadmap::Roadmap;

/// Client for the OpenAI chat completions API.
pub struct OpenAiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Chat completion request format.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Chat completion response format, reduced to the fields used here.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),
    #[error("OpenAI error: {0}")]
    Api(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),
}

fn audit_user_message(input: &AuditInput) -> String {
    format!(
        "Analyze this user's life system using their data: {}",
        Value::Object(input.clone())
    )
}

fn roadmap_user_message(latest_audit: &AuditRecord) -> Result<String, OpenAiError> {
    let audit_json = serde_json::to_string(latest_audit)
        .map_err(|e| OpenAiError::RequestFailed(e.to_string()))?;
    Ok(format!(
        "Generate a roadmap for this user based on their latest audit: {}",
        audit_json
    ))
}

/// Parse the model's text output into the expected JSON shape. Required keys
/// and types are enforced here; anything the model adds on top is ignored.
fn parse_output<T: DeserializeOwned>(content: &str) -> Result<T, OpenAiError> {
    serde_json::from_str(content).map_err(|e| OpenAiError::MalformedOutput(e.to_string()))
}

impl OpenAiClient {
    pub fn new(http_client: Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Analyze the submitted life data into a structured audit.
    pub async fn generate_audit(&self, input: &AuditInput) -> Result<AuditResult, OpenAiError> {
        let content = self
            .complete_json(SYSTEM_PROMPT, audit_user_message(input))
            .await?;
        parse_output(&content)
    }

    /// Generate a 12-week roadmap from the user's latest audit.
    pub async fn generate_roadmap(
        &self,
        latest_audit: &AuditRecord,
    ) -> Result<Roadmap, OpenAiError> {
        let content = self
            .complete_json(ROADMAP_PROMPT, roadmap_user_message(latest_audit)?)
            .await?;
        parse_output(&content)
    }

    /// Single blocking round trip to the chat completions endpoint,
    /// constrained to a JSON-object response. Returns the raw message text.
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_message: String,
    ) -> Result<String, OpenAiError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!("Sending request to OpenAI: {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenAiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api(format!("{}: {}", status, body)));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::InvalidResponse(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| OpenAiError::InvalidResponse("no message content".to_string()))
    }
}
