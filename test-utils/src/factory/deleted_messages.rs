//! Factory for `deleted_messages` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a sniped message authored by `username` at the given raw timestamp.
///
/// # Arguments
/// - `db` - Database connection
/// - `username` - Author name shown in the activity feed
/// - `timestamp` - Raw timestamp text as stored by the bot
///
/// # Returns
/// - `Ok(entity::deleted_messages::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_deleted_message(
    db: &DatabaseConnection,
    username: impl Into<String>,
    timestamp: impl Into<String>,
) -> Result<entity::deleted_messages::Model, DbErr> {
    entity::deleted_messages::ActiveModel {
        channel_id: ActiveValue::Set(Some(1)),
        user_id: ActiveValue::Set(None),
        username: ActiveValue::Set(Some(username.into())),
        content: ActiveValue::Set(Some("deleted".to_string())),
        timestamp: ActiveValue::Set(Some(timestamp.into())),
        ..Default::default()
    }
    .insert(db)
    .await
}
