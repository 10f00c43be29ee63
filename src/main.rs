mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use crate::server::{
    config::Config, error::AppError, router, service::responder::GeminiResponder, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    if config.uses_default_session_secret() {
        tracing::warn!("SESSION_SECRET is not set; using the built-in development secret");
    }
    if !config.has_discord_credentials() {
        tracing::warn!(
            "DISCORD_CLIENT_ID or DISCORD_CLIENT_SECRET is not set; Discord login will fail"
        );
    }
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; playground chat will fail");
    }

    let db = startup::connect_to_database(&config).await?;
    let session_store = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let responder = Arc::new(GeminiResponder::new(
        db.clone(),
        http_client.clone(),
        &config,
    ));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, db, http_client, oauth_client, responder);
    let app = router::app(state, session_store);

    tracing::info!("Prime dashboard listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
