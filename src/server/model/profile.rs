use crate::{
    model::user::InternalStateDto,
    server::model::{levels::UserLevels, memory::UserMemory, note::UserNote},
};

/// Everything the bot has recorded about one user.
#[derive(Debug, Clone, PartialEq)]
pub struct BotProfile {
    pub memory: Option<UserMemory>,
    /// Zero XP and level when the user has no level row.
    pub levels: UserLevels,
    pub notes: Vec<UserNote>,
}

impl BotProfile {
    pub fn into_dto(self) -> InternalStateDto {
        InternalStateDto {
            memory: self.memory.map(UserMemory::into_dto),
            levels: self.levels.into_dto(),
            notes_count: self.notes.len(),
        }
    }
}
