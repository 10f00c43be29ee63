use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned by `/login` while the dashboard login is switched off.
///
/// Shaped like a request-validation failure so the landing page's existing error
/// handling renders it.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginUnavailableDto {
    pub detail: Vec<ValidationDetailDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationDetailDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: Option<String>,
}

impl LoginUnavailableDto {
    pub fn dashboard_not_ready() -> Self {
        Self {
            detail: vec![ValidationDetailDto {
                kind: "connection_error".to_string(),
                loc: vec!["query".to_string(), "code".to_string()],
                msg: "cant connected to server".to_string(),
                input: None,
            }],
        }
    }
}
