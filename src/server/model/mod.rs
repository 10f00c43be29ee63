//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod conversation;
pub mod deleted_message;
pub mod discord;
pub mod levels;
pub mod memory;
pub mod note;
pub mod profile;
pub mod stats;
