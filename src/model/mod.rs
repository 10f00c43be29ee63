//! Data transfer objects exchanged over the JSON API.

pub mod api;
pub mod chat;
pub mod discord;
pub mod stats;
pub mod user;
