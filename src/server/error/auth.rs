use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, user::UnauthenticatedDto};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No Discord user is stored in the session.
    ///
    /// Results in 401 Unauthorized with `{"authenticated": false}`.
    #[error("No user in session")]
    NotAuthenticated,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the token stored by `/login`.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Discord refused to exchange the authorization code.
    ///
    /// Responds with Discord's own status code.
    #[error("Discord token exchange failed with status {status}: {body}")]
    TokenExchangeFailed { status: StatusCode, body: String },

    /// Discord refused to return the user's profile for the issued token.
    ///
    /// Responds with Discord's own status code.
    #[error("Discord user lookup failed with status {status}")]
    UserFetchFailed { status: StatusCode },
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` → 401 Unauthorized with `{"authenticated": false}`
/// - `CsrfValidationFailed` → 400 Bad Request with "There was an issue logging you in"
/// - `TokenExchangeFailed` / `UserFetchFailed` → Discord's status with a login failure message
///
/// Upstream failures are logged with Discord's response while the client only sees a
/// generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(UnauthenticatedDto {
                    authenticated: false,
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchangeFailed { status, body } => {
                tracing::error!("Failed to exchange code: {}", body);

                (
                    status,
                    Json(ErrorDto {
                        error: "Failed to login with Discord".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserFetchFailed { status } => {
                tracing::error!("Failed to fetch Discord user info: status {}", status);

                (
                    status,
                    Json(ErrorDto {
                        error: "Failed to fetch user info".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
