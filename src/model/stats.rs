use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub total_users: u64,
    pub total_commands: u64,
    pub ai_reflections: u64,
    /// Number of remembered users per vibe.
    pub vibe_distribution: BTreeMap<String, u64>,
    pub activities: Vec<ActivityDto>,
    pub system_status: String,
    /// Host-wide CPU usage in percent.
    pub cpu_load: f32,
    /// Host-wide memory usage in percent.
    pub ram_usage: f32,
    pub uptime_seconds: u64,
    pub process_id: u32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, PartialEq, Debug)]
pub struct ActivityDto {
    #[serde(rename = "type")]
    pub kind: String,
    /// Pre-rendered HTML fragment.
    pub content: String,
    /// Relative time such as `5m ago`.
    pub time: String,
}
