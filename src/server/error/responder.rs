use thiserror::Error;

/// Failures of the AI backend that answers chat messages.
#[derive(Error, Debug)]
pub enum ResponderError {
    /// No API key is configured, so no request can be made.
    #[error("AI responder is not configured")]
    NotConfigured,

    /// The backend answered with a non-success status.
    #[error("AI backend returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The backend answered but produced no text candidate.
    #[error("AI backend returned no text")]
    EmptyResponse,

    /// Transport or decoding failure talking to the backend.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Failed to read the conversation history used as context.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
