//! Playground chat: command handling in front of the AI responder.

use rand::seq::IndexedRandom;

use crate::server::{error::chat::ChatError, service::responder::ChatResponder};

const VIBE_LINES: [&str; 3] = [
    "the grid is pulsing with elite energy right now.",
    "keep your focus sharp. the architecture depends on it.",
    "current vibe: ultra-silver and high-performance.",
];

const HELP_TEXT: &str =
    "Available playground protocols: !vibe, !roast, !help, or just chat naturally with Prime.";

const DEFAULT_ROAST_TARGET: &str = "you";

/// What a playground message asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatCommand<'a> {
    /// `!vibe`: a canned vibe line, no AI call.
    Vibe,
    /// `!roast [target]`: an AI roast of the target.
    Roast(&'a str),
    /// `!help`: the list of commands, no AI call.
    Help,
    /// Anything else, including unknown `!` commands, goes to the AI as typed.
    Message(&'a str),
}

impl<'a> ChatCommand<'a> {
    /// Parses a trimmed, non-empty message.
    ///
    /// Only the first word is matched, case-insensitively. The roast target is the
    /// word right after the command; anything past it is ignored.
    pub fn parse(message: &'a str) -> Self {
        let mut words = message.split_whitespace();
        let command = words.next().unwrap_or_default();

        match command.to_lowercase().as_str() {
            "!vibe" => Self::Vibe,
            "!help" => Self::Help,
            "!roast" => Self::Roast(words.next().unwrap_or(DEFAULT_ROAST_TARGET)),
            _ => Self::Message(message),
        }
    }
}

/// Service answering playground messages.
pub struct ChatService<'a> {
    responder: &'a dyn ChatResponder,
}

impl<'a> ChatService<'a> {
    pub fn new(responder: &'a dyn ChatResponder) -> Self {
        Self { responder }
    }

    /// Answers a playground message.
    ///
    /// # Arguments
    /// - `message` - Raw message text; surrounding whitespace is ignored
    /// - `user_id` - Discord ID of the asker
    /// - `username` - Display name of the asker
    ///
    /// # Returns
    /// - `Ok(String)` - Reply text
    /// - `Err(ChatError::EmptyMessage)` - Message is blank
    /// - `Err(ChatError::Responder)` - The AI backend failed
    pub async fn reply(
        &self,
        message: &str,
        user_id: i64,
        username: &str,
    ) -> Result<String, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let reply = match ChatCommand::parse(message) {
            ChatCommand::Vibe => VIBE_LINES
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(VIBE_LINES[0])
                .to_string(),
            ChatCommand::Help => HELP_TEXT.to_string(),
            ChatCommand::Roast(target) => {
                let prompt = format!(
                    "Roast this person/thing: {}. Be savage but elite. No robot talk.",
                    target
                );
                self.responder.respond(&prompt, user_id, username).await?
            }
            ChatCommand::Message(text) => self.responder.respond(text, user_id, username).await?,
        };

        Ok(reply)
    }
}
