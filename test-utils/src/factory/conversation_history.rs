//! Factory for `conversation_history` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::timestamp_minutes_ago;

/// Creates a single conversation turn.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID the turn belongs to
/// - `role` - `"user"` or `"model"`
/// - `content` - Message text
///
/// # Returns
/// - `Ok(entity::conversation_history::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_message(
    db: &DatabaseConnection,
    user_id: i64,
    role: &str,
    content: impl Into<String>,
) -> Result<entity::conversation_history::Model, DbErr> {
    entity::conversation_history::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role.to_string()),
        content: ActiveValue::Set(content.into()),
        timestamp: ActiveValue::Set(Some(timestamp_minutes_ago(0))),
        ..Default::default()
    }
    .insert(db)
    .await
}
