use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, LoginUnavailableDto, ValidationDetailDto},
        chat::{ChatRequestDto, ChatResponseDto},
        stats::{ActivityDto, StatsDto},
        user::{InternalStateDto, LevelsDto, MeDto, UnauthenticatedDto, UserMemoryDto},
    },
    server::controller::{auth, chat, stats, user},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Prime Dashboard API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        user::get_me,
        stats::get_stats,
        chat::chat,
    ),
    components(schemas(
        ErrorDto,
        LoginUnavailableDto,
        ValidationDetailDto,
        ChatRequestDto,
        ChatResponseDto,
        StatsDto,
        ActivityDto,
        MeDto,
        InternalStateDto,
        LevelsDto,
        UserMemoryDto,
        UnauthenticatedDto,
    )),
    tags(
        (name = "auth", description = "Discord login"),
        (name = "user", description = "Logged-in user"),
        (name = "stats", description = "Public status page"),
        (name = "chat", description = "Web playground"),
    )
)]
pub struct ApiDoc;

/// GET /api/openapi.json - OpenAPI document for the JSON API
pub async fn get_openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
