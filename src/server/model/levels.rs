use crate::model::user::LevelsDto;

/// XP progress of a user. Users without a row are at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserLevels {
    pub xp: i64,
    pub level: i64,
}

impl UserLevels {
    pub fn into_dto(self) -> LevelsDto {
        LevelsDto {
            xp: self.xp,
            level: self.level,
        }
    }

    pub fn from_entity(entity: entity::user_levels::Model) -> Self {
        Self {
            xp: entity.xp,
            level: entity.level,
        }
    }
}
