//! Discord OAuth2 payloads.

use serde::{Deserialize, Serialize};

use crate::model::discord::{DiscordGuildDto, DiscordUserDto};

/// Form body posted to Discord's token endpoint.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
}

/// Successful response from Discord's token endpoint.
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Who logged in: the profile and guild list fetched with the user's token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordIdentity {
    pub user: DiscordUserDto,
    pub guilds: Vec<DiscordGuildDto>,
}
