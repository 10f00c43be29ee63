//! Conversation turns exchanged with the AI backend.

/// Who authored a conversation turn.
///
/// The string forms match both the `role` column and the roles the Gemini API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }

    /// Parses a stored role; anything other than `model` is treated as the user.
    pub fn from_stored(value: &str) -> Self {
        if value == "model" {
            Role::Model
        } else {
            Role::User
        }
    }
}

/// A single stored message in a user's conversation with the AI.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn from_entity(entity: entity::conversation_history::Model) -> Self {
        Self {
            role: Role::from_stored(&entity.role),
            content: entity.content,
        }
    }
}
