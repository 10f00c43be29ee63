//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the Prime dashboard: the Discord login
//! flow, the JSON API read by the dashboard and status pages, the playground chat relay
//! and the static site. The backend uses Axum as the web framework and SeaORM to read the
//! SQLite database the bot writes.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and calls to Discord and the AI backend
//! - **Data Layer** (`data/`) - Database queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed access to session state
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, responder, metrics)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions and clients
//! - **Router** (`router`) - Route table, static files and layers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** reads the session and request, calls a service
//! 3. **Service** runs business logic and orchestrates repositories and HTTP calls
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
