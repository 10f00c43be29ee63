use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::api::{ErrorDto, LoginUnavailableDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession, OAuthFlowSession},
        service::auth::DiscordAuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Where the browser lands after logging out.
const LOGOUT_REDIRECT: &str = "/dashboard/index.html";

/// Query parameters for the login endpoint.
#[derive(Deserialize)]
pub struct LoginParams {
    /// Same-site path to return to once logged in.
    pub next: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `code` - Authorization code used to exchange for access tokens
/// - `state` - CSRF token, checked when the flow was started by `/login`
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// GET /login - Start a Discord login
///
/// While the dashboard login is switched off this answers with a fixed 422 payload the
/// landing page knows how to render. When enabled, it remembers the requested `next`
/// path and redirects to Discord's consent screen.
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    params(
        ("next" = Option<String>, Query, description = "Same-site path to return to after login")
    ),
    responses(
        (status = 303, description = "Redirect to Discord's authorize URL"),
        (status = 422, description = "Dashboard login is not available", body = LoginUnavailableDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<Response, AppError> {
    if !state.config.dashboard_login_enabled {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LoginUnavailableDto::dashboard_not_ready()),
        )
            .into_response());
    }

    let auth_service =
        DiscordAuthService::new(&state.http_client, &state.oauth_client, &state.config);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    if let Some(next) = params.next.as_deref() {
        if !OAuthFlowSession::new(&session).set_next_url(next).await? {
            tracing::debug!("Ignoring off-site login destination {}", next);
        }
    }

    Ok(Redirect::to(url.as_str()).into_response())
}

/// GET /callback - Complete a Discord login
///
/// Exchanges the code for the user's profile and guilds, stores them in the session,
/// and redirects to the destination remembered by `/login` (or `/`).
#[utoipa::path(
    get,
    path = "/callback",
    tag = AUTH_TAG,
    params(
        ("code" = String, Query, description = "Authorization code from Discord"),
        ("state" = Option<String>, Query, description = "CSRF token issued by /login")
    ),
    responses(
        (status = 303, description = "Logged in; redirect to the requested page"),
        (status = 400, description = "Missing code or CSRF mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(code) = params.code.filter(|code| !code.is_empty()) else {
        return Err(AppError::BadRequest("Missing code".to_string()));
    };

    validate_csrf(&session, params.state.as_deref()).await?;

    let auth_service =
        DiscordAuthService::new(&state.http_client, &state.oauth_client, &state.config);
    let identity = auth_service.callback(&code).await?;

    AuthSession::new(&session).set_identity(&identity).await?;

    let next_url = OAuthFlowSession::new(&session).take_next_url().await?;

    Ok(Redirect::to(&next_url))
}

/// GET /logout - End the dashboard session
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared; redirect to the dashboard"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(Redirect::to(LOGOUT_REDIRECT))
}

/// Checks the callback `state` against the token stored by `/login`.
///
/// Logins that did not start at `/login` have no stored token and are not checked.
async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let Some(stored_state) = CsrfSession::new(session).take_token().await? else {
        return Ok(());
    };

    if csrf_state == Some(stored_state.as_str()) {
        return Ok(());
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
