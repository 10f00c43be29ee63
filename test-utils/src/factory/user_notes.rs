//! Factory for `user_notes` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::timestamp_minutes_ago;

/// Creates a moderator note for the given user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID the note is attached to
/// - `note` - Note text
///
/// # Returns
/// - `Ok(entity::user_notes::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_note(
    db: &DatabaseConnection,
    user_id: i64,
    note: impl Into<String>,
) -> Result<entity::user_notes::Model, DbErr> {
    entity::user_notes::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        note: ActiveValue::Set(note.into()),
        created_at: ActiveValue::Set(Some(timestamp_minutes_ago(0))),
        ..Default::default()
    }
    .insert(db)
    .await
}
