//! Memory repository over the bot's `user_memory` table.

use std::collections::BTreeMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::memory::UserMemory;

/// Key used in the vibe distribution for rows without a vibe.
const UNKNOWN_VIBE: &str = "unknown";

/// Repository providing read access to the AI's per-user memory.
pub struct UserMemoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserMemoryRepository<'a> {
    /// Creates a new UserMemoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserMemoryRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds what the AI remembers about a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(UserMemory))` - The AI has a memory of this user
    /// - `Ok(None)` - The user has never been reflected on
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Option<UserMemory>, DbErr> {
        let entity = entity::prelude::UserMemory::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserMemory::from_entity))
    }

    /// Counts remembered users per vibe.
    ///
    /// Rows with no vibe are counted under `unknown` rather than a `None` key, so the
    /// dashboard chart never shows a literal `None` bucket. Activity lines follow the
    /// same rule, and a missing username is shown as `Unknown`.
    ///
    /// # Returns
    /// - `Ok(BTreeMap<String, u64>)` - Vibe to number of users
    /// - `Err(DbErr)` - Database error during the grouped query
    pub async fn get_vibe_distribution(&self) -> Result<BTreeMap<String, u64>, DbErr> {
        let rows: Vec<(Option<String>, i64)> = entity::prelude::UserMemory::find()
            .select_only()
            .column(entity::user_memory::Column::Vibe)
            .column_as(entity::user_memory::Column::UserId.count(), "count")
            .group_by(entity::user_memory::Column::Vibe)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut distribution = BTreeMap::new();
        for (vibe, count) in rows {
            let key = vibe.unwrap_or_else(|| UNKNOWN_VIBE.to_string());
            *distribution.entry(key).or_insert(0) += count.max(0) as u64;
        }

        Ok(distribution)
    }

    /// Gets the most recently updated memories, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<UserMemory>)` - Up to `limit` memories ordered by `last_updated` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recently_updated(&self, limit: u64) -> Result<Vec<UserMemory>, DbErr> {
        let entities = entity::prelude::UserMemory::find()
            .order_by_desc(entity::user_memory::Column::LastUpdated)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserMemory::from_entity).collect())
    }
}
