//! Level repository over the bot's `user_levels` table.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use crate::server::model::levels::UserLevels;

/// Repository providing read access to users' XP and levels.
pub struct UserLevelsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserLevelsRepository<'a> {
    /// Creates a new UserLevelsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserLevelsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the level row for a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(UserLevels))` - User has earned XP
    /// - `Ok(None)` - User has no level row yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Option<UserLevels>, DbErr> {
        let entity = entity::prelude::UserLevels::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserLevels::from_entity))
    }

    /// Counts users the bot tracks levels for.
    ///
    /// Every user who has ever talked in a guild with the bot gets a level row, so this
    /// doubles as the bot's user count.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of level rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::UserLevels::find().count(self.db).await
    }
}
