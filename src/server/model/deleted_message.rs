/// A message the bot recorded after it was deleted in Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedMessage {
    pub username: Option<String>,
    pub content: Option<String>,
    /// Raw timestamp text as stored by the bot.
    pub timestamp: Option<String>,
}

impl DeletedMessage {
    pub fn from_entity(entity: entity::deleted_messages::Model) -> Self {
        Self {
            username: entity.username,
            content: entity.content,
            timestamp: entity.timestamp,
        }
    }
}
