use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::discord::{DiscordGuildDto, DiscordUserDto};

/// Response of `/api/me` for a logged-in user.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MeDto {
    pub authenticated: bool,
    /// Discord profile exactly as stored at login.
    #[schema(value_type = Object)]
    pub discord: DiscordUserDto,
    #[schema(value_type = Vec<Object>)]
    pub guilds: Vec<DiscordGuildDto>,
    pub internal: InternalStateDto,
}

/// What the bot knows about the user.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Debug)]
pub struct InternalStateDto {
    pub memory: Option<UserMemoryDto>,
    pub levels: LevelsDto,
    pub notes_count: usize,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Debug)]
pub struct UserMemoryDto {
    pub username: Option<String>,
    pub vibe: Option<String>,
    pub summary: Option<String>,
    pub last_updated: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Debug)]
pub struct LevelsDto {
    pub xp: i64,
    pub level: i64,
}

/// Response of `/api/me` when no user is in the session.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UnauthenticatedDto {
    pub authenticated: bool,
}
