//! AI backend that answers playground messages.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::{
    config::Config,
    data::conversation::ConversationRepository,
    error::responder::ResponderError,
    model::conversation::{ConversationTurn, Role},
};

/// Number of earlier turns replayed to the model as context.
const HISTORY_TURNS: u64 = 10;

/// Produces a reply to a chat prompt on behalf of a user.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// # Arguments
    /// - `prompt` - Text to answer, already rewritten for commands such as `!roast`
    /// - `user_id` - Discord ID of the asker (`999` for anonymous playground users)
    /// - `username` - Display name of the asker
    ///
    /// # Returns
    /// - `Ok(String)` - The reply text
    /// - `Err(ResponderError)` - The backend could not produce a reply
    async fn respond(
        &self,
        prompt: &str,
        user_id: i64,
        username: &str,
    ) -> Result<String, ResponderError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Google Gemini responder.
///
/// Keeps each user's conversation in the shared `conversation_history` table, the same
/// log the bot writes, so the dashboard and the bot remember the same conversation.
pub struct GeminiResponder {
    db: DatabaseConnection,
    http_client: reqwest::Client,
    api_key: Option<String>,
    api_url: Url,
    model: String,
}

impl GeminiResponder {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            api_key: config.gemini_api_key.clone(),
            api_url: config.gemini_api_url.clone(),
            model: config.gemini_model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.as_str().trim_end_matches('/'),
            self.model
        )
    }

    fn persona(username: &str) -> String {
        format!(
            "You are Prime, the AI core of a Discord community bot. You are confident, \
             sharp and a little theatrical, and you keep replies short enough for a chat \
             window. Never describe yourself as a language model. You are talking to {}.",
            username
        )
    }
}

#[async_trait]
impl ChatResponder for GeminiResponder {
    async fn respond(
        &self,
        prompt: &str,
        user_id: i64,
        username: &str,
    ) -> Result<String, ResponderError> {
        let api_key = self.api_key.as_deref().ok_or(ResponderError::NotConfigured)?;

        let conversation_repo = ConversationRepository::new(&self.db);
        let history = conversation_repo
            .get_recent_by_user(user_id, HISTORY_TURNS)
            .await?;

        let mut contents: Vec<Content> = history.into_iter().map(turn_content).collect();
        contents.push(Content {
            role: Some(Role::User.as_str()),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        });

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Self::persona(username),
                }],
            },
            contents,
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResponderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.json::<GenerateContentResponse>().await?;
        let reply = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ResponderError::EmptyResponse)?;

        if let Err(e) = conversation_repo.append(user_id, Role::User, prompt).await {
            tracing::warn!("Failed to store chat prompt for user {}: {}", user_id, e);
        }
        if let Err(e) = conversation_repo.append(user_id, Role::Model, &reply).await {
            tracing::warn!("Failed to store chat reply for user {}: {}", user_id, e);
        }

        Ok(reply)
    }
}

fn turn_content(turn: ConversationTurn) -> Content {
    Content {
        role: Some(turn.role.as_str()),
        parts: vec![Part { text: turn.content }],
    }
}
