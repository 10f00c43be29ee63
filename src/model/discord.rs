use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discord user profile as returned by `GET /users/@me`.
///
/// The fields the dashboard reads are typed; everything else Discord sends is kept in
/// `extra` so the profile round-trips through the session unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordUserDto {
    /// Snowflake ID, serialized by Discord as a string.
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial guild as returned by `GET /users/@me/guilds`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordGuildDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub permissions: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
