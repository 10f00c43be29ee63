//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Command parsing, stats assembly, graceful degradation
//! - **Orchestration**: Coordinating repository calls with Discord and the AI backend
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod chat;
pub mod metrics;
pub mod responder;
pub mod stats;
pub mod user;
