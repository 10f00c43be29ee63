//! Notes repository over the bot's `user_notes` table.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::note::UserNote;

/// Repository providing read access to moderator notes.
pub struct UserNotesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserNotesRepository<'a> {
    /// Creates a new UserNotesRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every note attached to a user, oldest first.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Vec<UserNote>)` - The user's notes (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<UserNote>, DbErr> {
        let entities = entity::prelude::UserNotes::find()
            .filter(entity::user_notes::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_notes::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserNote::from_entity).collect())
    }
}
