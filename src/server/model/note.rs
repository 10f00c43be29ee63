/// Moderator note attached to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserNote {
    pub id: i32,
    pub user_id: i64,
    pub note: String,
    pub created_at: Option<String>,
}

impl UserNote {
    pub fn from_entity(entity: entity::user_notes::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            note: entity.note,
            created_at: entity.created_at,
        }
    }
}
