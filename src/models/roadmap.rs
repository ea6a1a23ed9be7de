use serde::{Deserialize, Serialize};

/// Twelve-week optimization roadmap generated from a user's latest audit.
/// Returned to the caller directly, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub title: String,
    pub weeks: Vec<RoadmapWeek>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapWeek {
    pub week: u32,
    pub focus: String,
    pub actions: Vec<String>,
    pub failure_risk: String,
    pub counter_measure: String,
    pub metric: String,
}
