// models/response.rs
use serde::Serialize;

/// Response envelope for the match endpoints:
/// `{ status, message, response?, error? }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, response: T) -> Self {
        ApiResponse {
            status: true,
            message: message.into(),
            response: Some(response),
            error: None,
        }
    }
}
