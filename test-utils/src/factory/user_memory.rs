//! Factory for `user_memory` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, timestamp_minutes_ago};

/// Factory for creating AI memory rows.
///
/// Defaults:
/// - user_id: auto-incremented
/// - username: `"user{id}"`
/// - vibe: `"chill"`
/// - summary: `None`
/// - last_updated: now
pub struct UserMemoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    username: Option<String>,
    vibe: Option<String>,
    summary: Option<String>,
    last_updated: Option<String>,
}

impl<'a> UserMemoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id as i64,
            username: Some(format!("user{}", id)),
            vibe: Some("chill".to_string()),
            summary: None,
            last_updated: Some(timestamp_minutes_ago(0)),
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the vibe; `None` stores SQL `NULL`.
    pub fn vibe(mut self, vibe: Option<&str>) -> Self {
        self.vibe = vibe.map(str::to_string);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the raw `last_updated` text exactly as the bot would have written it.
    pub fn last_updated(mut self, last_updated: impl Into<String>) -> Self {
        self.last_updated = Some(last_updated.into());
        self
    }

    /// Builds and inserts the memory row.
    ///
    /// # Returns
    /// - `Ok(entity::user_memory::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_memory::Model, DbErr> {
        entity::user_memory::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            vibe: ActiveValue::Set(self.vibe),
            summary: ActiveValue::Set(self.summary),
            last_updated: ActiveValue::Set(self.last_updated),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a memory row with default values for the given user.
pub async fn create_user_memory(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::user_memory::Model, DbErr> {
    UserMemoryFactory::new(db).user_id(user_id).build().await
}
