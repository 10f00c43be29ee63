use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{MeDto, UnauthenticatedDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        service::user::UserService,
        state::AppState,
        util::parse::{parse_u64_from_string, snowflake_to_i64},
    },
};

pub static USER_TAG: &str = "user";

/// GET /api/me - Get the logged-in user
///
/// Returns the Discord profile and guilds captured at login together with what the
/// bot knows about the user: AI memory, XP/level and the number of moderator notes.
///
/// # Returns
/// - `200 OK`: MeDto
/// - `401 Unauthorized`: `{"authenticated": false}` when nobody is logged in
/// - `500 Internal Server Error`: Database error or corrupt session identity
#[utoipa::path(
    get,
    path = "/api/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged-in user with bot data", body = MeDto),
        (status = 401, description = "No user in session", body = UnauthenticatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(identity) = AuthSession::new(&session).get_identity().await? else {
        return Err(AuthError::NotAuthenticated.into());
    };

    let user_id = snowflake_to_i64(parse_u64_from_string(identity.user.id.clone())?)?;

    let profile = UserService::new(&state.db).get_profile(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MeDto {
            authenticated: true,
            discord: identity.user,
            guilds: identity.guilds,
            internal: profile.into_dto(),
        }),
    ))
}
