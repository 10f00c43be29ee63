//! Factory for `user_levels` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating level rows with customizable XP and level.
///
/// # Example
///
/// ```rust,ignore
/// let levels = UserLevelsFactory::new(&db, 123456789)
///     .xp(1500)
///     .level(7)
///     .build()
///     .await?;
/// ```
pub struct UserLevelsFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    xp: i64,
    level: i64,
}

impl<'a> UserLevelsFactory<'a> {
    /// Creates a new factory for the given user with `xp = 0` and `level = 0`.
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        Self {
            db,
            user_id,
            xp: 0,
            level: 0,
        }
    }

    pub fn xp(mut self, xp: i64) -> Self {
        self.xp = xp;
        self
    }

    pub fn level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    /// Builds and inserts the level row.
    ///
    /// # Returns
    /// - `Ok(entity::user_levels::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_levels::Model, DbErr> {
        entity::user_levels::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            xp: ActiveValue::Set(self.xp),
            level: ActiveValue::Set(self.level),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a level row with default values for the given user.
pub async fn create_user_levels(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::user_levels::Model, DbErr> {
    UserLevelsFactory::new(db, user_id).build().await
}
