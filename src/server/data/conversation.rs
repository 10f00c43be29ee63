//! Conversation repository over the bot's `conversation_history` table.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::conversation::{ConversationTurn, Role};

/// Repository providing access to the AI conversation log.
///
/// The log is shared with the bot: both processes append turns, and the dashboard
/// reads it for stats and as chat context.
pub struct ConversationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConversationRepository<'a> {
    /// Creates a new ConversationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts user messages that were bot commands (start with `!`).
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of command messages
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_commands(&self) -> Result<u64, DbErr> {
        entity::prelude::ConversationHistory::find()
            .filter(entity::conversation_history::Column::Role.eq(Role::User.as_str()))
            .filter(entity::conversation_history::Column::Content.starts_with("!"))
            .count(self.db)
            .await
    }

    /// Counts replies the AI has produced.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of `model` turns
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_model_replies(&self) -> Result<u64, DbErr> {
        entity::prelude::ConversationHistory::find()
            .filter(entity::conversation_history::Column::Role.eq(Role::Model.as_str()))
            .count(self.db)
            .await
    }

    /// Gets a user's most recent turns in chronological order.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `limit` - Maximum number of turns to return
    ///
    /// # Returns
    /// - `Ok(Vec<ConversationTurn>)` - The last `limit` turns, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent_by_user(
        &self,
        user_id: i64,
        limit: u64,
    ) -> Result<Vec<ConversationTurn>, DbErr> {
        let mut entities = entity::prelude::ConversationHistory::find()
            .filter(entity::conversation_history::Column::UserId.eq(user_id))
            .order_by_desc(entity::conversation_history::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.reverse();

        Ok(entities
            .into_iter()
            .map(ConversationTurn::from_entity)
            .collect())
    }

    /// Appends a turn to a user's conversation, stamped with the current UTC time.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `role` - Who authored the turn
    /// - `content` - Message text
    ///
    /// # Returns
    /// - `Ok(())` - Turn stored
    /// - `Err(DbErr)` - Database error during insert
    pub async fn append(&self, user_id: i64, role: Role, content: &str) -> Result<(), DbErr> {
        entity::conversation_history::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            content: ActiveValue::Set(content.to_string()),
            timestamp: ActiveValue::Set(Some(
                Utc::now()
                    .naive_utc()
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            )),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
