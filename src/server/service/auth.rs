use oauth2::{CsrfToken, Scope};
use reqwest::StatusCode;
use url::Url;

use crate::{
    model::discord::{DiscordGuildDto, DiscordUserDto},
    server::{
        config::Config,
        error::{auth::AuthError, AppError},
        model::discord::{DiscordIdentity, TokenRequest, TokenResponse},
        state::OAuth2Client,
    },
};

/// Service for the Discord OAuth2 login flow.
///
/// Builds the authorize URL and turns a callback code into the user's Discord identity.
/// The code exchange is done by hand rather than through the OAuth2 client so that
/// Discord's own status code can be passed back to the browser when it refuses a code.
pub struct DiscordAuthService<'a> {
    /// HTTP client for Discord API requests.
    http_client: &'a reqwest::Client,
    /// OAuth2 client holding the authorize endpoint and redirect URI.
    oauth_client: &'a OAuth2Client,
    /// Client credentials and the Discord API base URL.
    config: &'a Config,
}

impl<'a> DiscordAuthService<'a> {
    /// Creates a new DiscordAuthService instance.
    ///
    /// # Arguments
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    /// - `config` - Application configuration with the Discord credentials
    ///
    /// # Returns
    /// - `DiscordAuthService` - New service instance
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        config: &'a Config,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            config,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes, which is all `/api/me` shows.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback.
    ///
    /// Exchanges the authorization code for an access token, then fetches the user's
    /// profile and guild list with it. A failed guild lookup is not fatal; the user is
    /// logged in with no guilds.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the Discord redirect
    ///
    /// # Returns
    /// - `Ok(DiscordIdentity)` - Profile and guilds of the user who logged in
    /// - `Err(AppError::AuthErr(TokenExchangeFailed))` - Discord rejected the code
    /// - `Err(AppError::AuthErr(UserFetchFailed))` - Discord rejected the profile lookup
    /// - `Err(AppError::ReqwestErr)` - Discord could not be reached or sent malformed JSON
    pub async fn callback(&self, code: &str) -> Result<DiscordIdentity, AppError> {
        let token = self.exchange_code(code).await?;

        let user = self.fetch_discord_user(&token.access_token).await?;
        let guilds = self.fetch_user_guilds(&token.access_token).await?;

        tracing::info!(
            "Discord user {} ({}) logged in with {} guilds",
            user.username,
            user.id,
            guilds.len()
        );

        Ok(DiscordIdentity { user, guilds })
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AppError> {
        let response = self
            .http_client
            .post(self.config.discord_endpoint("oauth2/token"))
            .form(&TokenRequest {
                client_id: &self.config.discord_client_id,
                client_secret: &self.config.discord_client_secret,
                grant_type: "authorization_code",
                code,
                redirect_uri: &self.config.discord_redirect_url,
            })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenExchangeFailed { status, body }.into());
        }

        Ok(response.json::<TokenResponse>().await?)
    }

    /// Retrieves the logged-in user's profile from `users/@me`.
    ///
    /// # Returns
    /// - `Ok(DiscordUserDto)` - Profile with every field Discord sent
    /// - `Err(AppError::AuthErr(UserFetchFailed))` - Discord answered with a non-200 status
    /// - `Err(AppError::ReqwestErr)` - Request failed or response parsing failed
    async fn fetch_discord_user(&self, access_token: &str) -> Result<DiscordUserDto, AppError> {
        let response = self
            .http_client
            .get(self.config.discord_endpoint("users/@me"))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AuthError::UserFetchFailed { status }.into());
        }

        Ok(response.json::<DiscordUserDto>().await?)
    }

    /// Retrieves the guilds the logged-in user belongs to.
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordGuildDto>)` - Guild list, empty if Discord refused the lookup
    /// - `Err(AppError::ReqwestErr)` - Request failed or response parsing failed
    async fn fetch_user_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<DiscordGuildDto>, AppError> {
        let response = self
            .http_client
            .get(self.config.discord_endpoint("users/@me/guilds"))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Discord guild lookup failed with status {}", status);
            return Ok(Vec::new());
        }

        Ok(response.json::<Vec<DiscordGuildDto>>().await?)
    }
}
