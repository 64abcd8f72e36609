use axum::extract::rejection::JsonRejection;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CmsError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or missing session")]
    Unauthorized,

    #[error("Tool not found")]
    ToolNotFound,

    #[error("Bad request: {message}")]
    BadRequest { status: StatusCode, message: String },

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session expiry out of range")]
    SessionExpiryOverflow,

    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}

impl From<argon2::password_hash::Error> for CmsError {
    fn from(e: argon2::password_hash::Error) -> Self {
        CmsError::PasswordHash(e.to_string())
    }
}

impl From<JsonRejection> for CmsError {
    fn from(rejection: JsonRejection) -> Self {
        CmsError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for CmsError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            CmsError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            CmsError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Invalid or missing session".to_string(),
            ),
            CmsError::ToolNotFound => (StatusCode::NOT_FOUND, "Tool not found".to_string()),
            CmsError::BadRequest { status, message } => (status, message),
            CmsError::DatabaseError(_)
            | CmsError::JsonError(_)
            | CmsError::PasswordHash(_)
            | CmsError::Config(_)
            | CmsError::Io(_)
            | CmsError::SessionExpiryOverflow
            | CmsError::BlockingTask(_) => {
                tracing::error!(error = %self, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        (
            status,
            Json(ApiErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Error body shared by every failing endpoint.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub message: String,
}
