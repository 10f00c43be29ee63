use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, chat::ChatResponseDto},
    server::error::responder::ResponderError,
};

/// Reply shown in the playground whenever the relay fails internally.
pub const RELAY_FAILURE_MESSAGE: &str = "System Error: Failed to process neural link.";

/// Errors raised at the chat relay boundary.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Message was missing or blank after trimming.
    ///
    /// Results in 400 Bad Request.
    #[error("Message is empty")]
    EmptyMessage,

    /// Request body was not a valid chat payload.
    #[error("Invalid chat payload: {0}")]
    InvalidPayload(#[from] JsonRejection),

    /// The AI backend failed to produce a reply.
    #[error(transparent)]
    Responder(#[from] ResponderError),
}

/// Converts chat errors into HTTP responses.
///
/// Everything except an empty message is logged and reported as a 500 carrying the
/// playground's placeholder reply; no error detail reaches the client.
impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyMessage => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Message is empty".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("Chat API Error: {}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ChatResponseDto {
                        response: RELAY_FAILURE_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
