//! Prime Dashboard Test Utils
//!
//! Shared testing utilities for the dashboard's unit and integration tests. This crate
//! offers a builder for test contexts backed by in-memory SQLite databases carrying the
//! bot's tables, plus factories for seeding those tables.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for each bot table
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_levels() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(entity::prelude::UserLevels)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
