use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// User ID the playground chats under when no one is logged in.
pub const ANONYMOUS_USER_ID: i64 = 999;

#[derive(Deserialize, ToSchema)]
pub struct ChatRequestDto {
    #[serde(default)]
    pub message: String,
    /// Discord ID as a number or numeric string.
    #[serde(
        default = "default_user_id",
        deserialize_with = "deserialize_user_id"
    )]
    #[schema(value_type = i64)]
    pub user_id: i64,
    #[serde(default = "default_username")]
    pub username: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChatResponseDto {
    pub response: String,
}

fn default_user_id() -> i64 {
    ANONYMOUS_USER_ID
}

fn default_username() -> String {
    "Guest".to_string()
}

fn deserialize_user_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawUserId {
        Number(i64),
        Text(String),
    }

    match RawUserId::deserialize(deserializer)? {
        RawUserId::Number(id) => Ok(id),
        RawUserId::Text(id) => id.trim().parse::<i64>().map_err(D::Error::custom),
    }
}
