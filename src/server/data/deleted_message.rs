//! Snipe repository over the bot's `deleted_messages` table.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};

use crate::server::model::deleted_message::DeletedMessage;

pub struct DeletedMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeletedMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recently deleted messages, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<DeletedMessage>)` - Up to `limit` messages ordered by `timestamp` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<DeletedMessage>, DbErr> {
        let entities = entity::prelude::DeletedMessages::find()
            .order_by_desc(entity::deleted_messages::Column::Timestamp)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DeletedMessage::from_entity).collect())
    }
}
