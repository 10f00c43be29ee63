pub use super::conversation_history::Entity as ConversationHistory;
pub use super::deleted_messages::Entity as DeletedMessages;
pub use super::user_levels::Entity as UserLevels;
pub use super::user_memory::Entity as UserMemory;
pub use super::user_notes::Entity as UserNotes;
