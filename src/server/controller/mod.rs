//! HTTP request handlers.
//!
//! Controllers extract request data, call into the service layer, and convert domain
//! models into DTOs. Error mapping is left to the error types' `IntoResponse` impls.

pub mod auth;
pub mod chat;
pub mod openapi;
pub mod stats;
pub mod user;
