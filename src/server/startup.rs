//! Process startup: tracing, database, session store and outbound clients.
//!
//! The dashboard shares the bot's SQLite file. Startup creates any missing bot tables
//! and adds two of its own, `seaql_migrations` and `tower_sessions`; the bot ignores
//! both.

use std::time::Duration;

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Timeout applied to every outbound request to Discord and the AI backend.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations. The migrations only create
/// tables that do not exist yet, so a database the bot already populated is left intact.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store on the application database.
///
/// Session records live in their own table next to the bot's tables.
///
/// # Returns
/// - `Ok(SqliteStore)` - Migrated session store
/// - `Err(AppError::InternalError)` - Failed to create the session table
pub async fn connect_to_session(db: &sea_orm::DatabaseConnection) -> Result<SqliteStore, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(session_store)
}

/// Builds the outbound HTTP client.
///
/// Redirects are not followed so that a misbehaving upstream cannot steer requests
/// to other hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client used for Discord login URLs.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize endpoint and redirect URI set
/// - `Err(AppError::ConfigErr)` - Authorize or redirect URL is not a valid URL
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone()).map_err(|e| {
        ConfigError::InvalidEnvVar {
            key: "DISCORD_AUTH_URL".to_string(),
            reason: e.to_string(),
        }
    })?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|e| {
        ConfigError::InvalidEnvVar {
            key: "DISCORD_REDIRECT_URI".to_string(),
            reason: e.to_string(),
        }
    })?;

    let client = oauth2::basic::BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}
