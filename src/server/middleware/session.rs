//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - The Discord identity captured at login (profile and guilds)
//! - `CsrfSession` - CSRF token management for the OAuth round trip
//! - `OAuthFlowSession` - Where to send the user once the OAuth round trip completes
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::{
    model::discord::{DiscordGuildDto, DiscordUserDto},
    server::{error::AppError, model::discord::DiscordIdentity},
};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_GUILDS: &str = "auth:guilds";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_NEXT_URL: &str = "auth:next_url";

/// Where a completed login lands when no destination was requested.
pub const DEFAULT_NEXT_URL: &str = "/";

/// Authentication session management.
///
/// Holds the Discord profile and guild list exactly as Discord returned them at
/// login. Nothing is refreshed afterwards; a new login replaces both.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user's Discord profile and guilds.
    ///
    /// The session ID is cycled first so a pre-login cookie cannot be reused to
    /// ride the authenticated session.
    ///
    /// # Arguments
    /// - `identity` - Profile and guilds fetched with the user's access token
    ///
    /// # Returns
    /// - `Ok(())` - Identity successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_identity(&self, identity: &DiscordIdentity) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER, &identity.user)
            .await?;
        self.session
            .insert(SESSION_AUTH_GUILDS, &identity.guilds)
            .await?;
        Ok(())
    }

    /// Retrieves the Discord identity stored at login.
    ///
    /// A session holding a profile but no guild list yields an empty guild list.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_identity(&self) -> Result<Option<DiscordIdentity>, AppError> {
        let Some(user) = self.session.get::<DiscordUserDto>(SESSION_AUTH_USER).await? else {
            return Ok(None);
        };

        let guilds = self
            .session
            .get::<Vec<DiscordGuildDto>>(SESSION_AUTH_GUILDS)
            .await?
            .unwrap_or_default();

        Ok(Some(DiscordIdentity { user, guilds }))
    }

    /// Removes all session data and deletes the session record.
    ///
    /// Used during logout. The session cookie is expired on the response.
    ///
    /// # Returns
    /// - `Ok(())` - Session cleared
    /// - `Err(AppError::SessionErr(_))` - Failed to delete the stored record
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Arguments
    /// - `token` - The CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// Each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// OAuth flow state session management.
///
/// Remembers where the user asked to go before being sent to Discord.
pub struct OAuthFlowSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    /// Creates a new OAuthFlowSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the post-login destination.
    ///
    /// Only same-site paths are kept. Absolute URLs and protocol-relative paths such
    /// as `//evil.example` are ignored so the callback can never redirect off-site.
    ///
    /// # Arguments
    /// - `next_url` - Requested destination, typically from `/login?next=...`
    ///
    /// # Returns
    /// - `Ok(true)` - Destination stored
    /// - `Ok(false)` - Destination rejected and not stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_next_url(&self, next_url: &str) -> Result<bool, AppError> {
        if !is_relative_path(next_url) {
            return Ok(false);
        }

        self.session
            .insert(SESSION_AUTH_NEXT_URL, next_url.to_string())
            .await?;
        Ok(true)
    }

    /// Retrieves and removes the post-login destination.
    ///
    /// # Returns
    /// - `Ok(url)` - Stored destination, or `/` when none was stored
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_next_url(&self) -> Result<String, AppError> {
        let next_url: Option<String> = self.session.remove(SESSION_AUTH_NEXT_URL).await?;
        Ok(next_url.unwrap_or_else(|| DEFAULT_NEXT_URL.to_string()))
    }
}

fn is_relative_path(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//") && !url.contains('\\')
}
