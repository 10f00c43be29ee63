//! Schema for the bot-owned tables the dashboard reads.
//!
//! Every table is created with `IF NOT EXISTS`, so running these against the bot's
//! live database leaves existing tables untouched and only fills in missing ones.

pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_levels_table;
mod m20260101_000002_create_user_memory_table;
mod m20260101_000003_create_user_notes_table;
mod m20260101_000004_create_conversation_history_table;
mod m20260101_000005_create_deleted_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_levels_table::Migration),
            Box::new(m20260101_000002_create_user_memory_table::Migration),
            Box::new(m20260101_000003_create_user_notes_table::Migration),
            Box::new(m20260101_000004_create_conversation_history_table::Migration),
            Box::new(m20260101_000005_create_deleted_messages_table::Migration),
        ]
    }
}
