//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Configuration (Discord credentials, feature flags)
//! - Database connection pool for the bot's SQLite file
//! - HTTP client for Discord API requests
//! - OAuth2 client for building Discord login URLs
//! - AI responder answering playground messages
//! - Host metrics sampler for the status page

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    service::{metrics::MetricsSampler, responder::ChatResponder},
};

/// Type alias for the OAuth2 client configured for Discord authentication.
///
/// Only the authorize endpoint is set; the code exchange is performed with the plain
/// HTTP client so Discord's status codes can be passed through.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `Arc<Config>` and `Arc<dyn ChatResponder>` are reference-counted
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `MetricsSampler` shares its sampler through an `Arc`
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// Database connection pool for the SQLite file shared with the bot.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with a timeout and without redirect following. Used for Discord API
    /// calls.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Backend answering `/api/chat`.
    pub responder: Arc<dyn ChatResponder>,

    /// Host CPU/RAM sampler; also owns the server start instant used for uptime.
    pub metrics: MetricsSampler,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Discord authentication
    /// - `responder` - AI backend for the chat relay
    ///
    /// # Returns
    /// - `AppState` - Initialized application state; uptime counts from here
    pub fn new(
        config: Config,
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        responder: Arc<dyn ChatResponder>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            db,
            http_client,
            oauth_client,
            responder,
            metrics: MetricsSampler::new(),
        }
    }
}
