//! Database repository layer over the bot's tables.
//!
//! The dashboard shares its SQLite file with the bot. Repositories read what the bot
//! writes (levels, memory, notes, snipes) and append chat turns to the shared
//! conversation log. They use SeaORM entity models internally and return domain models
//! so the service layer never sees entities.

pub mod conversation;
pub mod deleted_message;
pub mod levels;
pub mod memory;
pub mod notes;

#[cfg(test)]
mod test;
