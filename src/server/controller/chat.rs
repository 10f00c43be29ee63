use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatRequestDto, ChatResponseDto},
    },
    server::{error::chat::ChatError, service::chat::ChatService, state::AppState},
};

pub static CHAT_TAG: &str = "chat";

/// POST /api/chat - Talk to Prime from the web playground
///
/// Handles the `!vibe`, `!roast` and `!help` commands and relays everything else to the
/// AI backend. A body that is not a valid chat payload is treated like any other
/// internal failure.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = CHAT_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Prime's reply", body = ChatResponseDto),
        (status = 400, description = "Message is empty", body = ErrorDto),
        (status = 500, description = "Placeholder reply after an internal failure", body = ChatResponseDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, ChatError> {
    let Json(payload) = payload?;

    let reply = ChatService::new(state.responder.as_ref())
        .reply(&payload.message, payload.user_id, &payload.username)
        .await?;

    Ok((StatusCode::OK, Json(ChatResponseDto { response: reply })))
}
