pub mod mock_openai;

use std::sync::Arc;

use serde_json::{json, Value};

use crate::models::audit::AuditInput;
use crate::{AppState, AuditStore, Config, OpenAiClient, SupabaseAuthClient};

/// Configuration pointing every external collaborator at injectable base
/// URLs, so tests can stand in mock servers.
pub fn test_config(supabase_url: &str, openai_base_url: &str, static_dir: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 3000,
        openai_api_key: "sk-test".to_string(),
        openai_base_url: openai_base_url.to_string(),
        openai_model: "gpt-4o".to_string(),
        supabase_url: supabase_url.to_string(),
        supabase_service_role_key: "test-service-role-key".to_string(),
        static_dir: static_dir.to_string(),
        http_timeout_secs: 5,
        log_level: "debug".to_string(),
    }
}

pub fn create_test_state(
    supabase_url: &str,
    openai_base_url: &str,
    static_dir: &str,
) -> Arc<AppState> {
    let config = test_config(supabase_url, openai_base_url, static_dir);
    let http_client = reqwest::Client::new();

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

    Arc::new(AppState {
        config,
        auth_client,
        openai_client,
        audit_store,
    })
}

/// User object as returned by the Supabase auth service.
pub fn supabase_user_json(user_id: &str, email: Option<&str>) -> Value {
    json!({
        "id": user_id,
        "aud": "authenticated",
        "role": "authenticated",
        "email": email,
    })
}

pub fn sample_audit_input() -> AuditInput {
    let mut input = AuditInput::new();
    input.insert("age".to_string(), json!(29));
    input.insert("weight_kg".to_string(), json!(82));
    input.insert("sleep_time".to_string(), json!("23:30"));
    input.insert("wake_time".to_string(), json!("07:00"));
    input.insert("addictions".to_string(), json!(["short-form video"]));
    input
}

pub fn sample_audit_result_json() -> Value {
    json!({
        "life_score": 64.5,
        "overview": "Stable base with attention leaks.",
        "strengths": ["regular sleep window", "steady income"],
        "weaknesses": ["dopamine-driven scrolling", "no resistance training"],
        "phases": {
            "phase_1": "Cut evening screen exposure to rebuild baseline dopamine sensitivity.",
            "phase_2": "Tie identity to a tracked daily non-negotiable.",
            "phase_3": "Three strength sessions per week, protein at maintenance.",
            "phase_4": "Redirect reclaimed attention into one career leverage project."
        }
    })
}

pub fn sample_roadmap_json() -> Value {
    json!({
        "title": "12-Week Systems Reset",
        "weeks": [
            {
                "week": 1,
                "focus": "Dopamine baseline",
                "actions": ["delete short-form apps", "fixed 23:00 cutoff"],
                "failure_risk": "Reinstalling apps on a low-energy evening",
                "counter_measure": "Device-level app blocking with a delay lock",
                "metric": "Zero short-form minutes logged"
            },
            {
                "week": 2,
                "focus": "Sleep anchoring",
                "actions": ["23:00 lights out", "07:00 wake, no snooze"],
                "failure_risk": "Weekend drift past midnight",
                "counter_measure": "Saturday morning training commitment",
                "metric": "7 on-time nights"
            }
        ]
    })
}
