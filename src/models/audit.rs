use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form life data submitted by the user. Any JSON object is accepted;
/// no schema is enforced on input.
pub type AuditInput = serde_json::Map<String, Value>;

/// Structured analysis produced by the model.
///
/// Deserializing the model output into this type is the shape check: all four
/// top-level keys and all four phase keys must be present with the right
/// types. Extra keys the model invents are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Overall score out of 100. Range is requested from the model, not enforced.
    pub life_score: f64,
    pub overview: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub phases: AuditPhases,
}

/// Four-phase optimization plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditPhases {
    pub phase_1: String,
    pub phase_2: String,
    pub phase_3: String,
    pub phase_4: String,
}

/// Persisted audit row as returned by the store. `created_at` is assigned
/// server-side on insert; rows are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub user_id: String,
    pub input_data: Value,
    pub ai_response: Value,
    pub created_at: DateTime<Utc>,
}
