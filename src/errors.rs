// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Fetch failed: {reason}")]
    FetchFailed { status: Option<u16>, reason: String },

    #[error("No matches found")]
    NoMatchesFound,

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Parse failure: {0}")]
    ParseFailure(String),

    #[error("Invalid user data")]
    InvalidUserData,

    #[error("Authentication error")]
    AuthError,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Service error: {0}")]
    ServiceError(String),
}

impl IntoResponse for AppError {

    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MongoDB(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string()),
            AppError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "Invalid argument".to_string()),
            AppError::FetchFailed { .. } => (StatusCode::BAD_GATEWAY, "Source page fetch failed".to_string()),
            AppError::NoMatchesFound => (StatusCode::NOT_FOUND, "No matches found".to_string()),
            AppError::MatchNotFound(_) => (StatusCode::NOT_FOUND, "Match not found".to_string()),
            AppError::ParseFailure(_) => (StatusCode::BAD_GATEWAY, "Source page parse failed".to_string()),
            AppError::InvalidUserData => (StatusCode::BAD_REQUEST, "Invalid user data".to_string()),
            AppError::AuthError => (StatusCode::UNAUTHORIZED, "Authentication failed".to_string()),
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "Validation failed".to_string()),
            AppError::ServiceError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Service error".to_string()),
        };

        let body = Json(json!({
            "status": false,
            "message": message,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// Manual From implementations
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };
        AppError::FetchFailed {
            status: err.status().map(|s| s.as_u16()),
            reason,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ValidationError(format!("JSON parsing error: {}", err))
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn fetch_failed(status: u16, reason: impl Into<String>) -> Self {
        AppError::FetchFailed {
            status: Some(status),
            reason: reason.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        AppError::ParseFailure(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        AppError::ServiceError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
