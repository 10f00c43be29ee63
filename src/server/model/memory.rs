//! What the bot's AI remembers about a user.

use crate::model::user::UserMemoryDto;

/// A user's AI memory row.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMemory {
    pub user_id: i64,
    pub username: Option<String>,
    /// Short mood label the AI assigned to the user.
    pub vibe: Option<String>,
    pub summary: Option<String>,
    /// Raw timestamp text as stored by the bot.
    pub last_updated: Option<String>,
}

impl UserMemory {
    pub fn into_dto(self) -> UserMemoryDto {
        UserMemoryDto {
            username: self.username,
            vibe: self.vibe,
            summary: self.summary,
            last_updated: self.last_updated,
        }
    }

    /// Converts an entity model to a memory domain model at the repository boundary.
    pub fn from_entity(entity: entity::user_memory::Model) -> Self {
        Self {
            user_id: entity.user_id,
            username: entity.username,
            vibe: entity.vibe,
            summary: entity.summary,
            last_updated: entity.last_updated,
        }
    }
}
