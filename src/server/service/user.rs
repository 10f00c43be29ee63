use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{levels::UserLevelsRepository, memory::UserMemoryRepository, notes::UserNotesRepository},
    model::profile::BotProfile,
};

/// Service reading what the bot knows about a dashboard user.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects the bot's memory, levels and notes for a user.
    ///
    /// Unlike the stats page, nothing degrades here: any database failure is returned
    /// so `/api/me` reports it instead of showing a fabricated profile.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID in the bot's signed form
    ///
    /// # Returns
    /// - `Ok(BotProfile)` - Memory if any, levels (zero if none) and notes
    /// - `Err(DbErr)` - Database error in any of the lookups
    pub async fn get_profile(&self, user_id: i64) -> Result<BotProfile, DbErr> {
        let memory = UserMemoryRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?;
        let levels = UserLevelsRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .unwrap_or_default();
        let notes = UserNotesRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(BotProfile {
            memory,
            levels,
            notes,
        })
    }
}
