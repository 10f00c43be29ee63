//! Stats snapshot assembled for the status page.

use std::collections::BTreeMap;

use crate::model::stats::{ActivityDto, StatsDto};

/// Counts and recent activity read from the bot database.
///
/// Every field defaults to zero or empty so that a failed query degrades only that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BotActivity {
    pub total_users: u64,
    pub total_commands: u64,
    pub ai_reflections: u64,
    pub vibe_distribution: BTreeMap<String, u64>,
    pub activities: Vec<ActivityDto>,
}

/// Live readings of this process and its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostMetrics {
    pub cpu_load: f32,
    pub ram_usage: f32,
    pub uptime_seconds: u64,
    pub process_id: u32,
}

/// Combined snapshot served by `/api/stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub activity: BotActivity,
    pub host: HostMetrics,
}

impl StatsSnapshot {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            total_users: self.activity.total_users,
            total_commands: self.activity.total_commands,
            ai_reflections: self.activity.ai_reflections,
            vibe_distribution: self.activity.vibe_distribution,
            activities: self.activity.activities,
            system_status: "ONLINE".to_string(),
            cpu_load: self.host.cpu_load,
            ram_usage: self.host.ram_usage,
            uptime_seconds: self.host.uptime_seconds,
            process_id: self.host.process_id,
        }
    }
}
