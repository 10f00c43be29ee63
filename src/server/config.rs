use std::path::PathBuf;

use sha2::{Digest, Sha512};
use tower_sessions::cookie::Key;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_API_URL: &str = "https://discord.com/api";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/callback";
const DEFAULT_SESSION_SECRET: &str = "super-secret-prime-key";
const DEFAULT_DATABASE_URL: &str = "sqlite://bot_memory.db?mode=rwc";
const DEFAULT_STATIC_DIR: &str = "website";
const DEFAULT_PORT: u16 = 8000;
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub static_dir: PathBuf,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    /// Base of Discord's REST API; token and user endpoints are resolved against it.
    pub discord_api_url: Url,

    pub session_secret: String,
    /// Serve the real OAuth redirect from `/login` instead of the "not ready" payload.
    pub dashboard_login_enabled: bool,

    pub gemini_api_key: Option<String>,
    pub gemini_api_url: Url,
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and well-formed
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value fails to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = match lookup("PORT").filter(|value| !value.is_empty()) {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                key: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let dashboard_login_enabled = parse_flag(lookup("DASHBOARD_LOGIN_ENABLED"));

        // The site, stats and chat run without a Discord application; the login
        // redirect cannot.
        let (discord_client_id, discord_client_secret) = if dashboard_login_enabled {
            (
                required("DISCORD_CLIENT_ID")?,
                required("DISCORD_CLIENT_SECRET")?,
            )
        } else {
            (
                optional("DISCORD_CLIENT_ID", ""),
                optional("DISCORD_CLIENT_SECRET", ""),
            )
        };

        Ok(Self {
            port,
            database_url: optional("DATABASE_URL", DEFAULT_DATABASE_URL),
            static_dir: PathBuf::from(optional("STATIC_DIR", DEFAULT_STATIC_DIR)),
            discord_client_id,
            discord_client_secret,
            discord_redirect_url: optional("DISCORD_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_api_url: parse_base_url(
                "DISCORD_API_URL",
                &optional("DISCORD_API_URL", DISCORD_API_URL),
            )?,
            session_secret: optional("SESSION_SECRET", DEFAULT_SESSION_SECRET),
            dashboard_login_enabled,
            gemini_api_key: lookup("GEMINI_API_KEY").filter(|value| !value.is_empty()),
            gemini_api_url: parse_base_url(
                "GEMINI_API_URL",
                &optional("GEMINI_API_URL", GEMINI_API_URL),
            )?,
            gemini_model: optional("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        })
    }

    /// Whether a Discord application is configured for the OAuth flow.
    pub fn has_discord_credentials(&self) -> bool {
        !self.discord_client_id.is_empty() && !self.discord_client_secret.is_empty()
    }

    /// Whether the session secret is still the built-in development value.
    pub fn uses_default_session_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET
    }

    /// Derives the cookie signing key from `SESSION_SECRET`.
    ///
    /// The secret is stretched through SHA-512 because the signing key needs 64 bytes
    /// regardless of how long the configured secret is.
    pub fn session_key(&self) -> Key {
        let digest = Sha512::digest(self.session_secret.as_bytes());
        Key::from(digest.as_slice())
    }

    /// Resolves a path such as `users/@me` against the Discord API base.
    pub fn discord_endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.discord_api_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn parse_flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
