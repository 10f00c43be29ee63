use crate::{
    model::discord::{DiscordGuildDto, DiscordUserDto},
    server::{
        middleware::session::{AuthSession, CsrfSession, OAuthFlowSession},
        model::discord::DiscordIdentity,
    },
};
use test_utils::builder::TestBuilder;

mod auth;
mod csrf;
mod oauth_flow;

fn identity(user_id: &str) -> DiscordIdentity {
    DiscordIdentity {
        user: DiscordUserDto {
            id: user_id.to_string(),
            username: "neo".to_string(),
            global_name: Some("Neo".to_string()),
            avatar: None,
            discriminator: Some("0".to_string()),
            extra: serde_json::Map::from_iter([(
                "locale".to_string(),
                serde_json::Value::String("en-US".to_string()),
            )]),
        },
        guilds: vec![DiscordGuildDto {
            id: "900".to_string(),
            name: "Grid".to_string(),
            icon: None,
            owner: true,
            permissions: Some("8".to_string()),
            extra: serde_json::Map::new(),
        }],
    }
}
