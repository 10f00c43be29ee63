use html_escape::encode_safe;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::stats::ActivityDto,
    server::{
        data::{
            conversation::ConversationRepository, deleted_message::DeletedMessageRepository,
            levels::UserLevelsRepository, memory::UserMemoryRepository,
        },
        model::stats::{BotActivity, StatsSnapshot},
        service::metrics::MetricsSampler,
        util::{fallback::or_default, time::format_time_ago},
    },
};

/// Number of AI reflections shown in the activity feed.
const RECENT_REFLECTIONS: u64 = 3;
/// Number of sniped messages shown in the activity feed.
const RECENT_SNIPES: u64 = 2;

const REFLECTION_ACTIVITY: &str = "AI Reflection";
const MODERATION_ACTIVITY: &str = "Moderation";

/// Service assembling the public status page.
///
/// The status page must render even when the bot database is missing, locked, or
/// from an older schema, so every database-derived field is fetched independently and
/// falls back to its empty value on failure.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    metrics: &'a MetricsSampler,
}

impl<'a> StatsService<'a> {
    /// Creates a new StatsService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `metrics` - Shared host metrics sampler
    ///
    /// # Returns
    /// - `StatsService` - New service instance
    pub fn new(db: &'a DatabaseConnection, metrics: &'a MetricsSampler) -> Self {
        Self { db, metrics }
    }

    /// Builds the stats snapshot. Never fails.
    ///
    /// # Returns
    /// - `StatsSnapshot` - Bot counts and activity (degraded per field) plus live host metrics
    pub async fn get_stats(&self) -> StatsSnapshot {
        let activity = self.get_bot_activity().await;
        let host = self.metrics.sample().await;

        StatsSnapshot { activity, host }
    }

    async fn get_bot_activity(&self) -> BotActivity {
        let levels_repo = UserLevelsRepository::new(self.db);
        let memory_repo = UserMemoryRepository::new(self.db);
        let conversation_repo = ConversationRepository::new(self.db);

        let total_users = or_default("total users", levels_repo.count()).await;
        let total_commands = or_default("total commands", conversation_repo.count_commands()).await;
        let ai_reflections =
            or_default("AI reflections", conversation_repo.count_model_replies()).await;
        let vibe_distribution =
            or_default("vibe distribution", memory_repo.get_vibe_distribution()).await;

        let mut activities = or_default("recent reflections", self.recent_reflections()).await;
        activities.extend(or_default("recent snipes", self.recent_snipes()).await);

        BotActivity {
            total_users,
            total_commands,
            ai_reflections,
            vibe_distribution,
            activities,
        }
    }

    async fn recent_reflections(&self) -> Result<Vec<ActivityDto>, DbErr> {
        let memories = UserMemoryRepository::new(self.db)
            .get_recently_updated(RECENT_REFLECTIONS)
            .await?;

        Ok(memories
            .into_iter()
            .map(|memory| ActivityDto {
                kind: REFLECTION_ACTIVITY.to_string(),
                content: format!(
                    "Updated vibe for <strong>@{}</strong> to <span class='mention'>'{}'</span>",
                    encode_safe(display_name(memory.username.as_deref())),
                    encode_safe(memory.vibe.as_deref().unwrap_or("unknown")),
                ),
                time: format_time_ago(memory.last_updated.as_deref()),
            })
            .collect())
    }

    async fn recent_snipes(&self) -> Result<Vec<ActivityDto>, DbErr> {
        let messages = DeletedMessageRepository::new(self.db)
            .get_recent(RECENT_SNIPES)
            .await?;

        Ok(messages
            .into_iter()
            .map(|message| ActivityDto {
                kind: MODERATION_ACTIVITY.to_string(),
                content: format!(
                    "Sniped a deleted message from <strong>@{}</strong>.",
                    encode_safe(display_name(message.username.as_deref())),
                ),
                time: format_time_ago(message.timestamp.as_deref()),
            })
            .collect())
    }
}

fn display_name(username: Option<&str>) -> &str {
    username.filter(|name| !name.is_empty()).unwrap_or("Unknown")
}
