//! SeaORM entities for the tables the Prime bot keeps in its SQLite database.
//!
//! The bot process owns these tables; the dashboard reads them (and appends to
//! `conversation_history` when relaying chat).

pub mod prelude;

pub mod conversation_history;
pub mod deleted_messages;
pub mod user_levels;
pub mod user_memory;
pub mod user_notes;
