//! Factory methods for creating test data.
//!
//! This module provides factory methods for seeding the bot's tables with sensible
//! defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let levels = factory::create_user_levels(&db, 123456789).await?;
//!     let memory = factory::user_memory::UserMemoryFactory::new(&db)
//!         .user_id(123456789)
//!         .vibe("chill")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user_levels` - XP / level rows
//! - `user_memory` - AI memory rows (vibe, summary)
//! - `user_notes` - Moderator notes
//! - `conversation_history` - Chat turns
//! - `deleted_messages` - Sniped messages
//! - `helpers` - ID generation and timestamp formatting

pub mod conversation_history;
pub mod deleted_messages;
pub mod helpers;
pub mod user_levels;
pub mod user_memory;
pub mod user_notes;

pub use conversation_history::create_message;
pub use deleted_messages::create_deleted_message;
pub use user_levels::create_user_levels;
pub use user_memory::create_user_memory;
pub use user_notes::create_note;
